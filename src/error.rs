//! Error types for dxf-lite

use std::io;
use thiserror::Error;

/// Main error type for dxf-lite operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred while reading the stream
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The record stream or a geometric construction is malformed
    #[error("Structural error: {0}")]
    Structural(#[from] StructuralError),

    /// A tagged value could not be stored into an entity field
    #[error("Field error: {0}")]
    SetField(#[from] SetFieldError),

    /// The specification tables are inconsistent
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

/// Malformed record streams and invalid geometric constructions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// Parallel coordinate/bulge lists differ in length
    #[error("coordinate lists differ in length: x={x}, y={y}, bulges={bulges}")]
    MismatchedLengths { x: usize, y: usize, bulges: usize },

    /// A polyline needs at least two vertices
    #[error("a polyline needs at least 2 vertices, got {0}")]
    TooFewVertices(usize),

    /// `next_pair` was called with nothing left to read
    #[error("unexpected end of stream at line {0}")]
    UnexpectedEof(u64),

    /// A group code line was not followed by a value line
    #[error("group code '{code}' at line {line} has no value")]
    TruncatedPair { code: String, line: u64 },

    /// A group code line is not an integer
    #[error("invalid group code '{code}' at line {line}")]
    InvalidGroupCode { code: String, line: u64 },

    /// The stream ended before the section's ENDSEC marker
    #[error("section {0} is missing its ENDSEC marker")]
    MissingSectionEnd(String),
}

/// Failures while assigning a raw tagged value to an entity field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetFieldError {
    /// The raw value cannot be coerced to the field's type
    #[error("cannot convert '{value}' to {target} for field {field}")]
    Conversion {
        field: String,
        value: String,
        target: &'static str,
    },

    /// The structure has no field by that name
    #[error("unknown field {0}")]
    UnknownField(String),
}

impl SetFieldError {
    pub(crate) fn conversion(field: &str, value: &str, target: &'static str) -> Self {
        SetFieldError::Conversion {
            field: field.to_string(),
            value: value.to_string(),
            target,
        }
    }
}

/// Defects in the build-time specification tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No spec is registered under the requested key
    #[error("unknown spec '{0}'")]
    UnknownSpec(String),

    /// Two fields of the same spec claim one group code
    #[error("spec '{spec}' maps both {first} and {second} to group code {code}")]
    DuplicateCode {
        spec: String,
        code: i16,
        first: String,
        second: String,
    },

    /// Two specs are registered under one name
    #[error("spec '{0}' is defined more than once")]
    DuplicateSpec(String),

    /// A spec names a field its wire structure does not accept
    #[error("spec '{spec}' names unknown field {field}")]
    UnknownField { spec: String, field: String },
}

/// Result type alias for dxf-lite operations
pub type Result<T> = std::result::Result<T, DxfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_error_display() {
        let err = StructuralError::MismatchedLengths { x: 3, y: 2, bulges: 3 };
        assert_eq!(
            err.to_string(),
            "coordinate lists differ in length: x=3, y=2, bulges=3"
        );
    }

    #[test]
    fn test_conversion_error_display() {
        let err = SetFieldError::conversion("Radius", "abc", "f64");
        assert!(err.to_string().contains("'abc'"));
        assert!(err.to_string().contains("Radius"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }

    #[test]
    fn test_nested_error_conversion() {
        let err: DxfError = ConfigurationError::UnknownSpec("SPLINE".into()).into();
        assert!(matches!(err, DxfError::Configuration(_)));
        assert_eq!(err.to_string(), "Configuration error: unknown spec 'SPLINE'");
    }
}
