//! Lightweight polyline entity (2D polyline with bulges)

use bitflags::bitflags;

use super::field::{parse_double, CommonStructure, FieldRef, WireStructure};
use super::{Entity, EntityCommon, EntityType};
use crate::error::{SetFieldError, StructuralError};
use crate::geometry::GeoPolyline;

bitflags! {
    /// Polyline flags (group code 70).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LwPolylineFlags: i16 {
        /// Last vertex connects back to the first.
        const CLOSED = 1;
        /// Line type pattern runs continuously through the vertices.
        const PLINEGEN = 128;
    }
}

/// A lightweight (2D) polyline entity
#[derive(Debug, Clone, PartialEq)]
pub struct LwPolyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Polyline flags, code 70
    pub flags: LwPolylineFlags,
    /// Constant width (if all segments have same width)
    pub constant_width: f64,
    /// Elevation (Z coordinate)
    pub elevation: f64,
    /// Thickness (extrusion in Z direction)
    pub thickness: f64,
    /// Per-vertex start widths, empty when none were written
    pub start_widths: Vec<f64>,
    /// Per-vertex end widths, empty when none were written
    pub end_widths: Vec<f64>,
    polyline: GeoPolyline,
}

impl LwPolyline {
    /// Check if the polyline is closed
    pub fn is_closed(&self) -> bool {
        self.flags.contains(LwPolylineFlags::CLOSED)
    }

    /// Outline of the polyline, closing segment included
    pub fn polyline(&self) -> &GeoPolyline {
        &self.polyline
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        let segments = self.polyline.segment_count();
        if self.is_closed() {
            segments
        } else {
            segments + 1
        }
    }

    /// Length along the outline, arcs included
    pub fn length(&self) -> f64 {
        self.polyline.length()
    }

    /// Enclosed area, arcs included
    pub fn area(&self) -> f64 {
        self.polyline.area()
    }
}

impl Entity for LwPolyline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn entity_type(&self) -> &'static str {
        "LWPOLYLINE"
    }
}

/// Wire form of an LWPOLYLINE record
#[derive(Debug, Default)]
pub struct LwPolylineStructure {
    common: CommonStructure,
    vertex_count: i32,
    flags: i16,
    constant_width: f64,
    elevation: f64,
    thickness: f64,
    x: Vec<f64>,
    y: Vec<f64>,
    bulges: Vec<f64>,
    start_widths: Vec<f64>,
    end_widths: Vec<f64>,
}

impl WireStructure for LwPolylineStructure {
    const SPEC_NAME: &'static str = "LWPOLYLINE";
    const FIELD_NAMES: &'static [&'static str] = &[
        "VertexX",
        "VertexY",
        "Elevation",
        "Thickness",
        "StartWidth",
        "EndWidth",
        "Bulge",
        "ConstantWidth",
        "Flags",
        "VertexCount",
    ];

    fn common_mut(&mut self) -> &mut CommonStructure {
        &mut self.common
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldRef<'_>> {
        Some(match name {
            "VertexY" => FieldRef::DoubleList(&mut self.y),
            "Elevation" => FieldRef::Double(&mut self.elevation),
            "Thickness" => FieldRef::Double(&mut self.thickness),
            "StartWidth" => FieldRef::DoubleList(&mut self.start_widths),
            "EndWidth" => FieldRef::DoubleList(&mut self.end_widths),
            "ConstantWidth" => FieldRef::Double(&mut self.constant_width),
            "Flags" => FieldRef::Int16(&mut self.flags),
            "VertexCount" => FieldRef::Int32(&mut self.vertex_count),
            _ => return None,
        })
    }

    /// Each vertex starts straight; a following bulge reshapes the segment
    /// leaving the most recent vertex.
    fn coerce(&mut self, name: &str, raw: &str) -> Option<Result<(), SetFieldError>> {
        match name {
            "VertexX" => Some(parse_double(name, raw).map(|x| {
                self.x.push(x);
                self.bulges.push(0.0);
            })),
            "Bulge" => Some(parse_double(name, raw).map(|bulge| {
                if let Some(last) = self.bulges.last_mut() {
                    *last = bulge;
                }
            })),
            _ => None,
        }
    }

    fn into_entity(self) -> Result<EntityType, StructuralError> {
        let flags = LwPolylineFlags::from_bits_truncate(self.flags);
        let polyline = GeoPolyline::new(&self.x, &self.y, &self.bulges, flags.contains(LwPolylineFlags::CLOSED))?;
        if self.vertex_count > 0 && self.vertex_count as usize != self.x.len() {
            tracing::debug!(
                declared = self.vertex_count,
                read = self.x.len(),
                "LWPOLYLINE vertex count differs from vertices read"
            );
        }
        Ok(EntityType::LwPolyline(LwPolyline {
            common: self.common.into_common(),
            flags,
            constant_width: self.constant_width,
            elevation: self.elevation,
            thickness: self.thickness,
            start_widths: self.start_widths,
            end_widths: self.end_widths,
            polyline,
        }))
    }
}
