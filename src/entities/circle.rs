//! Circle entity

use std::f64::consts::PI;

use super::field::{CommonStructure, FieldRef, WireStructure};
use super::{Entity, EntityCommon, EntityType};
use crate::error::StructuralError;
use crate::geometry::GeoPoint;

/// A full circle
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: GeoPoint,
    /// Radius
    pub radius: f64,
    /// Thickness (extrusion in Z direction)
    pub thickness: f64,
}

impl Circle {
    /// Create a circle on layer "0"
    pub fn new(center: GeoPoint, radius: f64) -> Self {
        Circle {
            common: EntityCommon::new(),
            center,
            radius,
            thickness: 0.0,
        }
    }

    /// Get the diameter
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Get the circumference
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Get the enclosed area
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl Entity for Circle {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn entity_type(&self) -> &'static str {
        "CIRCLE"
    }
}

/// Wire form of a CIRCLE record
#[derive(Debug, Default)]
pub struct CircleStructure {
    common: CommonStructure,
    center_x: f64,
    center_y: f64,
    center_z: f64,
    radius: f64,
    thickness: f64,
}

impl WireStructure for CircleStructure {
    const SPEC_NAME: &'static str = "CIRCLE";
    const FIELD_NAMES: &'static [&'static str] = &["CenterX", "CenterY", "CenterZ", "Thickness", "Radius"];

    fn common_mut(&mut self) -> &mut CommonStructure {
        &mut self.common
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldRef<'_>> {
        let field = match name {
            "CenterX" => &mut self.center_x,
            "CenterY" => &mut self.center_y,
            "CenterZ" => &mut self.center_z,
            "Thickness" => &mut self.thickness,
            "Radius" => &mut self.radius,
            _ => return None,
        };
        Some(FieldRef::Double(field))
    }

    fn into_entity(self) -> Result<EntityType, StructuralError> {
        Ok(EntityType::Circle(Circle {
            common: self.common.into_common(),
            center: GeoPoint::new(self.center_x, self.center_y, self.center_z),
            radius: self.radius,
            thickness: self.thickness,
        }))
    }
}
