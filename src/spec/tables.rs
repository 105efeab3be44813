//! Declarative group-code tables for the supported entity types

use super::SpecSource;

/// Key of the spec shared by every entity type
pub const COMMON_SPEC: &str = "COMMON";

/// Fields every entity carries
pub const COMMON: SpecSource = SpecSource {
    name: COMMON_SPEC,
    fields: &[
        ("Handle", 5),
        ("LineType", 6),
        ("Layer", 8),
        ("Invisible", 60),
        ("Color", 62),
        ("LineWeight", 370),
    ],
};

pub const LINE: SpecSource = SpecSource {
    name: "LINE",
    fields: &[
        ("StartX", 10),
        ("StartY", 20),
        ("StartZ", 30),
        ("EndX", 11),
        ("EndY", 21),
        ("EndZ", 31),
        ("Thickness", 39),
    ],
};

pub const CIRCLE: SpecSource = SpecSource {
    name: "CIRCLE",
    fields: &[
        ("CenterX", 10),
        ("CenterY", 20),
        ("CenterZ", 30),
        ("Thickness", 39),
        ("Radius", 40),
    ],
};

/// Circle fields plus the start and end angles in degrees
pub const ARC: SpecSource = SpecSource {
    name: "ARC",
    fields: &[
        ("CenterX", 10),
        ("CenterY", 20),
        ("CenterZ", 30),
        ("Thickness", 39),
        ("Radius", 40),
        ("StartAngle", 50),
        ("EndAngle", 51),
    ],
};

/// Vertex codes 10/20/42 repeat once per vertex
pub const LWPOLYLINE: SpecSource = SpecSource {
    name: "LWPOLYLINE",
    fields: &[
        ("VertexX", 10),
        ("VertexY", 20),
        ("Elevation", 38),
        ("Thickness", 39),
        ("StartWidth", 40),
        ("EndWidth", 41),
        ("Bulge", 42),
        ("ConstantWidth", 43),
        ("Flags", 70),
        ("VertexCount", 90),
    ],
};

/// Hatch codes are overloaded by position in the record stream; the wire
/// structure routes them according to its parse state.
pub const HATCH: SpecSource = SpecSource {
    name: "HATCH",
    fields: &[
        ("PatternName", 2),
        ("ElevationX", 10),
        ("ElevationY", 20),
        ("ElevationZ", 30),
        ("EdgeEndX", 11),
        ("EdgeEndY", 21),
        ("EdgeRadius", 40),
        ("PatternScale", 41),
        ("Bulge", 42),
        ("EdgeStartAngle", 50),
        ("EdgeEndAngle", 51),
        ("PatternAngle", 52),
        ("SolidFillFlag", 70),
        ("AssociativeFlag", 71),
        ("EdgeType", 72),
        ("IsClosed", 73),
        ("HatchStyle", 75),
        ("PatternType", 76),
        ("BoundaryPathCount", 91),
        ("PathTypeFlags", 92),
        ("PathItemCount", 93),
        ("SourceBoundaryCount", 97),
        ("SeedPointCount", 98),
    ],
};

/// Every table the standard registry is built from
pub const STANDARD_SPECS: &[SpecSource] = &[COMMON, LINE, CIRCLE, ARC, LWPOLYLINE, HATCH];
