//! # dxf-lite
//!
//! A pure Rust library for reading ASCII DXF files into a typed document,
//! with exact length and area computation for polylines that contain arcs.
//!
//! ## Features
//!
//! - Streaming reader over alternating group code / value lines
//! - Declarative group-code tables driving one generic entity parse loop
//! - LINE, CIRCLE, ARC, LWPOLYLINE and HATCH entities
//! - Bulge-based line-or-arc segments and polylines with signed areas
//! - Pre-2007 code pages honoured through `$DWGCODEPAGE`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dxf_lite::{io::dxf::DxfReader, Hatch, LwPolyline};
//!
//! let doc = DxfReader::from_file("sample.dxf")?.read()?;
//!
//! for polyline in doc.entities_of::<LwPolyline>() {
//!     println!("length {:.3}, area {:.3}", polyline.length(), polyline.area());
//! }
//! let hatched: f64 = doc.entities_of::<Hatch>().map(Hatch::area).sum();
//! println!("hatched area {:.3}", hatched);
//! # Ok::<(), dxf_lite::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`TaggedReader`](io::dxf::TaggedReader) - source of raw (code, value) pairs
//! - [`SpecRegistry`] - field name to group code tables, built once
//! - [`WireStructure`](entities::WireStructure) - flat field bag per entity
//!   type, converted once into an [`EntityType`]
//! - [`SectionsContainer`] - header variables and entities of one read

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod io;
pub mod notification;
pub mod spec;
pub mod types;

// Re-export commonly used types
pub use error::{ConfigurationError, DxfError, Result, SetFieldError, StructuralError};
pub use types::{Color, Handle, LineWeight};

pub use geometry::{Bulge, GeoLine, GeoPoint, GeoPolyline};

// Re-export entity types
pub use entities::{Arc, Circle, Entity, EntityType, EntityVariant, Hatch, Line, LwPolyline};

pub use document::{HeaderValue, SectionsContainer};
pub use spec::SpecRegistry;

// Re-export I/O types
pub use io::dxf::{DxfReader, DxfReaderConfiguration};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
