//! Line entity

use super::field::{CommonStructure, FieldRef, WireStructure};
use super::{Entity, EntityCommon, EntityType};
use crate::error::StructuralError;
use crate::geometry::{GeoLine, GeoPoint};

/// A straight line between two points
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point
    pub start: GeoPoint,
    /// End point
    pub end: GeoPoint,
    /// Thickness (extrusion in Z direction)
    pub thickness: f64,
}

impl Line {
    /// Create a line on layer "0"
    pub fn new(start: GeoPoint, end: GeoPoint) -> Self {
        Line {
            common: EntityCommon::new(),
            start,
            end,
            thickness: 0.0,
        }
    }

    /// Get the length
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Get the midpoint
    pub fn midpoint(&self) -> GeoPoint {
        self.start.midpoint(&self.end)
    }

    /// The line as a straight segment
    pub fn geo_line(&self) -> GeoLine {
        GeoLine::straight(self.start, self.end)
    }
}

impl Entity for Line {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn entity_type(&self) -> &'static str {
        "LINE"
    }
}

/// Wire form of a LINE record
#[derive(Debug, Default)]
pub struct LineStructure {
    common: CommonStructure,
    start_x: f64,
    start_y: f64,
    start_z: f64,
    end_x: f64,
    end_y: f64,
    end_z: f64,
    thickness: f64,
}

impl WireStructure for LineStructure {
    const SPEC_NAME: &'static str = "LINE";
    const FIELD_NAMES: &'static [&'static str] =
        &["StartX", "StartY", "StartZ", "EndX", "EndY", "EndZ", "Thickness"];

    fn common_mut(&mut self) -> &mut CommonStructure {
        &mut self.common
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldRef<'_>> {
        let field = match name {
            "StartX" => &mut self.start_x,
            "StartY" => &mut self.start_y,
            "StartZ" => &mut self.start_z,
            "EndX" => &mut self.end_x,
            "EndY" => &mut self.end_y,
            "EndZ" => &mut self.end_z,
            "Thickness" => &mut self.thickness,
            _ => return None,
        };
        Some(FieldRef::Double(field))
    }

    fn into_entity(self) -> Result<EntityType, StructuralError> {
        Ok(EntityType::Line(Line {
            common: self.common.into_common(),
            start: GeoPoint::new(self.start_x, self.start_y, self.start_z),
            end: GeoPoint::new(self.end_x, self.end_y, self.end_z),
            thickness: self.thickness,
        }))
    }
}
