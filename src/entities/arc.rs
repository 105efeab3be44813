//! Arc entity

use super::field::{CommonStructure, FieldRef, WireStructure};
use super::{Entity, EntityCommon, EntityType};
use crate::error::StructuralError;
use crate::geometry::{GeoLine, GeoPoint};

/// An arc entity (portion of a circle), swept counter-clockwise from the
/// start angle to the end angle
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: GeoPoint,
    /// Radius
    pub radius: f64,
    /// Start angle in degrees
    pub start_angle: f64,
    /// End angle in degrees
    pub end_angle: f64,
    /// Thickness (extrusion in Z direction)
    pub thickness: f64,
}

impl Arc {
    /// Create an arc from its center, radius and angles in degrees
    pub fn new(center: GeoPoint, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Arc {
            common: EntityCommon::new(),
            center,
            radius,
            start_angle,
            end_angle,
            thickness: 0.0,
        }
    }

    /// Angular extent in radians, in `(0, 2π]`
    pub fn sweep_angle(&self) -> f64 {
        let mut sweep = (self.end_angle - self.start_angle).rem_euclid(360.0);
        if sweep == 0.0 {
            sweep = 360.0;
        }
        sweep.to_radians()
    }

    /// Length along the arc
    pub fn arc_length(&self) -> f64 {
        self.radius * self.sweep_angle()
    }

    /// The arc as bulged segments: one for sweeps up to 180°, two beyond
    pub fn segments(&self) -> Vec<GeoLine> {
        let start = self.start_angle.to_radians();
        GeoLine::arc_segments(self.center, start, start + self.sweep_angle(), self.radius)
    }

    /// Point at the start angle
    pub fn start_point(&self) -> GeoPoint {
        self.point_at(self.start_angle.to_radians())
    }

    /// Point at the end angle
    pub fn end_point(&self) -> GeoPoint {
        self.point_at(self.end_angle.to_radians())
    }

    fn point_at(&self, angle: f64) -> GeoPoint {
        GeoPoint::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
            self.center.z,
        )
    }
}

impl Entity for Arc {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn entity_type(&self) -> &'static str {
        "ARC"
    }
}

/// Wire form of an ARC record
#[derive(Debug, Default)]
pub struct ArcStructure {
    common: CommonStructure,
    center_x: f64,
    center_y: f64,
    center_z: f64,
    radius: f64,
    thickness: f64,
    start_angle: f64,
    end_angle: f64,
}

impl WireStructure for ArcStructure {
    const SPEC_NAME: &'static str = "ARC";
    const FIELD_NAMES: &'static [&'static str] = &[
        "CenterX",
        "CenterY",
        "CenterZ",
        "Thickness",
        "Radius",
        "StartAngle",
        "EndAngle",
    ];

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
            "StartAngle" => &mut self.start_angle,
            "EndAngle" => &mut self.end_angle,
            _ => return None,
        };
        Some(FieldRef::Double(field))
    }

    fn into_entity(self) -> Result<EntityType, StructuralError> {
        Ok(EntityType::Arc(Arc {
            common: self.common.into_common(),
            center: GeoPoint::new(self.center_x, self.center_y, self.center_z),
            radius: self.radius,
            start_angle: self.start_angle,
            end_angle: self.end_angle,
            thickness: self.thickness,
        }))
    }
}
