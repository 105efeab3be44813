//! Small value types shared by every entity

pub mod color;
pub mod handle;
pub mod line_weight;

pub use color::Color;
pub use handle::Handle;
pub use line_weight::LineWeight;
