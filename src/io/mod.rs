//! Reading DXF files

pub mod dxf;

pub use dxf::{DxfReader, DxfReaderConfiguration};
