//! Field assignment for wire structures
//!
//! A wire structure is a flat bag of fields matching the record stream one
//! to one. The entity builder fills it by field name, then converts it once
//! into the public entity.

use super::{EntityCommon, EntityType};
use crate::error::{SetFieldError, StructuralError};
use crate::types::{Color, Handle, LineWeight};

/// Mutable view of one field together with its semantic kind.
#[derive(Debug)]
pub enum FieldRef<'a> {
    Text(&'a mut String),
    Double(&'a mut f64),
    Int16(&'a mut i16),
    Int32(&'a mut i32),
    /// Stored as an integer in the stream, nonzero means `true`
    Bool(&'a mut bool),
    /// Hexadecimal text
    Handle(&'a mut Handle),
    /// Repeated code, each value is appended
    DoubleList(&'a mut Vec<f64>),
}

impl FieldRef<'_> {
    /// Default same-kind conversion of `raw` into the field.
    pub fn assign(self, field: &str, raw: &str) -> Result<(), SetFieldError> {
        match self {
            FieldRef::Text(target) => *target = raw.to_string(),
            FieldRef::Double(target) => *target = parse_double(field, raw)?,
            FieldRef::Int16(target) => *target = parse_int(field, raw, "i16")?,
            FieldRef::Int32(target) => *target = parse_int(field, raw, "i32")?,
            FieldRef::Bool(target) => *target = parse_flag(field, raw)?,
            FieldRef::Handle(target) => {
                *target = Handle::from_hex(raw.trim())
                    .ok_or_else(|| SetFieldError::conversion(field, raw, "handle"))?
            }
            FieldRef::DoubleList(target) => target.push(parse_double(field, raw)?),
        }
        Ok(())
    }
}

/// Parse a finite floating point value
pub fn parse_double(field: &str, raw: &str) -> Result<f64, SetFieldError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SetFieldError::conversion(field, raw, "f64"))
}

/// Parse an integer of the given width
pub fn parse_int<T: std::str::FromStr>(field: &str, raw: &str, target: &'static str) -> Result<T, SetFieldError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| SetFieldError::conversion(field, raw, target))
}

/// Integer flag, any nonzero value is `true`
pub fn parse_flag(field: &str, raw: &str) -> Result<bool, SetFieldError> {
    parse_int::<i64>(field, raw, "bool").map(|v| v != 0)
}

/// Flat field bag for one entity type.
pub trait WireStructure: Default {
    /// Key of the spec describing this structure
    const SPEC_NAME: &'static str;
    /// Every field name the structure accepts
    const FIELD_NAMES: &'static [&'static str];

    fn common_mut(&mut self) -> &mut CommonStructure;

    /// Field for a plain conversion, `None` for unknown names
    fn field_mut(&mut self, name: &str) -> Option<FieldRef<'_>>;

    /// Custom conversion for fields that are not a plain cast. Returning
    /// `None` falls through to [`field_mut`](WireStructure::field_mut).
    fn coerce(&mut self, _name: &str, _raw: &str) -> Option<Result<(), SetFieldError>> {
        None
    }

    fn set_field(&mut self, name: &str, raw: &str) -> Result<(), SetFieldError> {
        if let Some(result) = self.coerce(name, raw) {
            return result;
        }
        match self.field_mut(name) {
            Some(field) => field.assign(name, raw),
            None => Err(SetFieldError::UnknownField(name.to_string())),
        }
    }

    /// Build the public entity, deriving composite values.
    fn into_entity(self) -> Result<EntityType, StructuralError>;
}

/// Wire form of the attributes shared by every entity.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonStructure {
    /// Code 5
    pub handle: Handle,
    /// Code 6
    pub line_type: String,
    /// Code 8
    pub layer: String,
    /// Code 60
    pub invisible: bool,
    /// Raw ACI value, code 62
    pub color: i16,
    /// Raw line weight, code 370
    pub line_weight: i16,
}

impl CommonStructure {
    /// Field names of the common spec
    pub const FIELD_NAMES: &'static [&'static str] =
        &["Handle", "LineType", "Layer", "Invisible", "Color", "LineWeight"];

    /// Typed slot for a common field name
    pub fn field_mut(&mut self, name: &str) -> Option<FieldRef<'_>> {
        Some(match name {
            "Handle" => FieldRef::Handle(&mut self.handle),
            "LineType" => FieldRef::Text(&mut self.line_type),
            "Layer" => FieldRef::Text(&mut self.layer),
            "Invisible" => FieldRef::Bool(&mut self.invisible),
            "Color" => FieldRef::Int16(&mut self.color),
            "LineWeight" => FieldRef::Int16(&mut self.line_weight),
            _ => return None,
        })
    }

    /// Convert and store one common field
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<(), SetFieldError> {
        match self.field_mut(name) {
            Some(field) => field.assign(name, raw),
            None => Err(SetFieldError::UnknownField(name.to_string())),
        }
    }

    /// Decode the raw values into [`EntityCommon`]
    pub fn into_common(self) -> EntityCommon {
        EntityCommon {
            handle: self.handle,
            layer: self.layer,
            line_type: self.line_type,
            color: Color::from_index(self.color),
            line_weight: LineWeight::from_value(self.line_weight),
            invisible: self.invisible,
        }
    }
}

impl Default for CommonStructure {
    fn default() -> Self {
        CommonStructure {
            handle: Handle::NULL,
            line_type: "ByLayer".to_string(),
            layer: "0".to_string(),
            invisible: false,
            color: 256,
            line_weight: -1,
        }
    }
}
