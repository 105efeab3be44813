//! Hatch entity and boundary path types

use bitflags::bitflags;

use super::field::{parse_double, parse_flag, parse_int, CommonStructure, FieldRef, WireStructure};
use super::{Entity, EntityCommon, EntityType};
use crate::error::{SetFieldError, StructuralError};
use crate::geometry::{GeoLine, GeoPoint, GeoPolyline};

/// Hatch pattern type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HatchPatternType {
    /// User-defined pattern
    UserDefined = 0,
    /// Predefined pattern
    #[default]
    Predefined = 1,
    /// Custom pattern
    Custom = 2,
}

impl HatchPatternType {
    /// Decode group code 76; unknown values fall back to predefined
    pub fn from_value(value: i16) -> Self {
        match value {
            0 => HatchPatternType::UserDefined,
            2 => HatchPatternType::Custom,
            _ => HatchPatternType::Predefined,
        }
    }
}

/// Hatch style type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HatchStyleType {
    /// Hatch "odd parity" area (normal)
    #[default]
    Normal = 0,
    /// Hatch outermost area only
    Outer = 1,
    /// Hatch through entire area
    Ignore = 2,
}

impl HatchStyleType {
    /// Decode group code 75; unknown values fall back to normal
    pub fn from_value(value: i16) -> Self {
        match value {
            1 => HatchStyleType::Outer,
            2 => HatchStyleType::Ignore,
            _ => HatchStyleType::Normal,
        }
    }
}

bitflags! {
    /// Boundary path type flags (group code 92).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BoundaryPathFlags: i32 {
        const EXTERNAL = 1;
        /// Vertices with bulges rather than edges.
        const POLYLINE = 2;
        const DERIVED = 4;
        const TEXTBOX = 8;
        const OUTERMOST = 16;
    }
}

/// One closed loop bounding the hatched area
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPath {
    /// Path type flags, code 92
    pub flags: BoundaryPathFlags,
    /// Closed outline of the path
    pub polyline: GeoPolyline,
}

impl BoundaryPath {
    /// `true` for the loop that encloses the others
    pub fn is_outer(&self) -> bool {
        self.flags
            .intersects(BoundaryPathFlags::EXTERNAL | BoundaryPathFlags::OUTERMOST)
    }

    /// Area enclosed by this loop alone
    pub fn area(&self) -> f64 {
        self.polyline.area()
    }
}

/// A hatch entity
#[derive(Debug, Clone, PartialEq)]
pub struct Hatch {
    /// Common entity data
    pub common: EntityCommon,
    /// Elevation point, codes 10/20/30 before the first path
    pub elevation_point: GeoPoint,
    /// Pattern name, `SOLID` for solid fills
    pub pattern_name: String,
    /// Solid fill flag, code 70
    pub has_solid_fill: bool,
    /// Associativity flag, code 71
    pub is_associative: bool,
    pub style: HatchStyleType,
    pub pattern_type: HatchPatternType,
    /// Pattern angle in degrees
    pub pattern_angle: f64,
    pub pattern_scale: f64,
    pub seed_point_count: i32,
    boundary_paths: Vec<BoundaryPath>,
    skipped_paths: usize,
}

impl Hatch {
    /// Boundary loops that could be built, in file order
    pub fn boundary_paths(&self) -> &[BoundaryPath] {
        &self.boundary_paths
    }

    /// Paths whose edges include ellipses or splines, left out of the
    /// boundary
    pub fn skipped_path_count(&self) -> usize {
        self.skipped_paths
    }

    /// The loop enclosing the hatch: the first path flagged external or
    /// outermost, else the first path.
    pub fn outer_path(&self) -> Option<&BoundaryPath> {
        self.boundary_paths
            .iter()
            .find(|path| path.is_outer())
            .or_else(|| self.boundary_paths.first())
    }

    /// How many other paths enclose each path, in path order
    pub fn nesting_depths(&self) -> Vec<usize> {
        self.boundary_paths
            .iter()
            .enumerate()
            .map(|(index, path)| {
                let Some(anchor) = path.polyline.segments().first().map(GeoLine::point0) else {
                    return 0;
                };
                self.boundary_paths
                    .iter()
                    .enumerate()
                    .filter(|(other_index, other)| *other_index != index && other.polyline.contains(&anchor))
                    .count()
            })
            .collect()
    }

    /// Hatched area.
    ///
    /// Each path is weighted by its nesting depth: even depths are filled
    /// and odd depths are holes. `Outer` stops after the first level of
    /// islands and `Ignore` fills the outermost loops whole.
    pub fn area(&self) -> f64 {
        self.boundary_paths
            .iter()
            .zip(self.nesting_depths())
            .filter(|(_, depth)| match self.style {
                HatchStyleType::Normal => true,
                HatchStyleType::Outer => *depth <= 1,
                HatchStyleType::Ignore => *depth == 0,
            })
            .map(|(path, depth)| if depth % 2 == 0 { path.area() } else { -path.area() })
            .sum()
    }
}

impl Entity for Hatch {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn entity_type(&self) -> &'static str {
        "HATCH"
    }
}

/// Where the hatch is in its record stream, which decides what the
/// overloaded codes 10/20/40/42/50/51/72/73 mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum HatchSection {
    #[default]
    Elevation,
    Boundary,
    Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeKind {
    Line,
    CircularArc,
    Unsupported(i16),
}

#[derive(Debug, Clone, Copy)]
struct EdgeBuilder {
    kind: EdgeKind,
    x: f64,
    y: f64,
    end_x: f64,
    end_y: f64,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    counter_clockwise: bool,
}

impl EdgeBuilder {
    fn new(edge_type: i16) -> Self {
        let kind = match edge_type {
            1 => EdgeKind::Line,
            2 => EdgeKind::CircularArc,
            other => EdgeKind::Unsupported(other),
        };
        EdgeBuilder {
            kind,
            x: 0.0,
            y: 0.0,
            end_x: 0.0,
            end_y: 0.0,
            radius: 0.0,
            start_angle: 0.0,
            end_angle: 0.0,
            counter_clockwise: true,
        }
    }

    /// Segments of one edge; an arc edge over 180° yields two
    fn segments(self) -> Vec<GeoLine> {
        match self.kind {
            EdgeKind::Line => vec![GeoLine::straight(
                GeoPoint::xy(self.x, self.y),
                GeoPoint::xy(self.end_x, self.end_y),
            )],
            EdgeKind::CircularArc => {
                let mut sweep = (self.end_angle - self.start_angle).rem_euclid(360.0);
                if sweep == 0.0 {
                    sweep = 360.0;
                }
                // Clockwise arcs store their angles mirrored about the x-axis.
                let (start, sweep) = if self.counter_clockwise {
                    (self.start_angle, sweep)
                } else {
                    (-self.start_angle, -sweep)
                };
                GeoLine::arc_segments(
                    GeoPoint::xy(self.x, self.y),
                    start.to_radians(),
                    (start + sweep).to_radians(),
                    self.radius,
                )
            }
            EdgeKind::Unsupported(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct PathBuilder {
    flags: BoundaryPathFlags,
    item_count: Option<usize>,
    x: Vec<f64>,
    y: Vec<f64>,
    bulges: Vec<f64>,
    edges: Vec<EdgeBuilder>,
    finished: bool,
}

impl PathBuilder {
    fn is_polyline(&self) -> bool {
        self.flags.contains(BoundaryPathFlags::POLYLINE)
    }

    fn in_spline_edge(&self) -> bool {
        matches!(self.edges.last(), Some(edge) if edge.kind == EdgeKind::Unsupported(4))
    }

    fn is_supported(&self) -> bool {
        self.edges
            .iter()
            .all(|edge| !matches!(edge.kind, EdgeKind::Unsupported(_)))
    }

    fn set(&mut self, name: &str, raw: &str) -> Result<(), SetFieldError> {
        if self.finished {
            return Ok(());
        }
        if name == "SourceBoundaryCount" {
            // A spline edge uses 97 for its fit point count.
            if !self.in_spline_edge() {
                self.finished = true;
            }
            return Ok(());
        }
        if name == "PathItemCount" {
            self.item_count = Some(parse_int::<i32>(name, raw, "i32")?.max(0) as usize);
            return Ok(());
        }
        if self.is_polyline() {
            self.set_vertex_field(name, raw)
        } else {
            self.set_edge_field(name, raw)
        }
    }

    fn set_vertex_field(&mut self, name: &str, raw: &str) -> Result<(), SetFieldError> {
        match name {
            "ElevationX" => {
                self.x.push(parse_double(name, raw)?);
                self.bulges.push(0.0);
            }
            "ElevationY" => self.y.push(parse_double(name, raw)?),
            "Bulge" => {
                let bulge = parse_double(name, raw)?;
                if let Some(last) = self.bulges.last_mut() {
                    *last = bulge;
                }
            }
            // 72 has-bulge and 73 is-closed: bulges are read when present
            // and hatch loops are always closed.
            "EdgeType" | "IsClosed" => {
                parse_int::<i16>(name, raw, "i16")?;
            }
            _ => {}
        }
        Ok(())
    }

    fn set_edge_field(&mut self, name: &str, raw: &str) -> Result<(), SetFieldError> {
        if name == "EdgeType" {
            let within_count = self.item_count.map_or(true, |count| self.edges.len() < count);
            if within_count {
                self.edges.push(EdgeBuilder::new(parse_int(name, raw, "i16")?));
            }
            return Ok(());
        }
        let Some(edge) = self.edges.last_mut() else {
            return Ok(());
        };
        if matches!(edge.kind, EdgeKind::Unsupported(_)) {
            return Ok(());
        }
        match name {
            "ElevationX" => edge.x = parse_double(name, raw)?,
            "ElevationY" => edge.y = parse_double(name, raw)?,
            "EdgeEndX" => edge.end_x = parse_double(name, raw)?,
            "EdgeEndY" => edge.end_y = parse_double(name, raw)?,
            "EdgeRadius" => edge.radius = parse_double(name, raw)?,
            "EdgeStartAngle" => edge.start_angle = parse_double(name, raw)?,
            "EdgeEndAngle" => edge.end_angle = parse_double(name, raw)?,
            "IsClosed" => edge.counter_clockwise = parse_flag(name, raw)?,
            _ => {}
        }
        Ok(())
    }

    fn build(self) -> Result<Option<BoundaryPath>, StructuralError> {
        let polyline = if self.is_polyline() {
            GeoPolyline::new(&self.x, &self.y, &self.bulges, true)?
        } else {
            if !self.is_supported() {
                return Ok(None);
            }
            let lines = self.edges.into_iter().flat_map(EdgeBuilder::segments).collect();
            GeoPolyline::from_segments(lines)?
        };
        Ok(Some(BoundaryPath {
            flags: self.flags,
            polyline,
        }))
    }
}

/// Wire form of a HATCH record
#[derive(Debug, Default)]
pub struct HatchStructure {
    common: CommonStructure,
    elevation_x: f64,
    elevation_y: f64,
    elevation_z: f64,
    pattern_name: String,
    solid_fill_flag: bool,
    associative_flag: bool,
    hatch_style: i16,
    pattern_type: i16,
    pattern_angle: f64,
    pattern_scale: f64,
    boundary_path_count: i32,
    seed_point_count: i32,
    paths: Vec<PathBuilder>,
    section: HatchSection,
}

impl HatchStructure {
    fn begin_path(&mut self, name: &str, raw: &str) -> Result<(), SetFieldError> {
        let bits = parse_int::<i32>(name, raw, "i32")?;
        self.paths.push(PathBuilder {
            flags: BoundaryPathFlags::from_bits_truncate(bits),
            ..PathBuilder::default()
        });
        self.section = HatchSection::Boundary;
        Ok(())
    }
}

impl WireStructure for HatchStructure {
    const SPEC_NAME: &'static str = "HATCH";
    const FIELD_NAMES: &'static [&'static str] = &[
        "PatternName",
        "ElevationX",
        "ElevationY",
        "ElevationZ",
        "EdgeEndX",
        "EdgeEndY",
        "EdgeRadius",
        "PatternScale",
        "Bulge",
        "EdgeStartAngle",
        "EdgeEndAngle",
        "PatternAngle",
        "SolidFillFlag",
        "AssociativeFlag",
        "EdgeType",
        "IsClosed",
        "HatchStyle",
        "PatternType",
        "BoundaryPathCount",
        "PathTypeFlags",
        "PathItemCount",
        "SourceBoundaryCount",
        "SeedPointCount",
    ];

    fn common_mut(&mut self) -> &mut CommonStructure {
        &mut self.common
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldRef<'_>> {
        Some(match name {
            "PatternName" => FieldRef::Text(&mut self.pattern_name),
            "ElevationX" => FieldRef::Double(&mut self.elevation_x),
            "ElevationY" => FieldRef::Double(&mut self.elevation_y),
            "ElevationZ" => FieldRef::Double(&mut self.elevation_z),
            "PatternScale" => FieldRef::Double(&mut self.pattern_scale),
            "PatternAngle" => FieldRef::Double(&mut self.pattern_angle),
            "HatchStyle" => FieldRef::Int16(&mut self.hatch_style),
            "PatternType" => FieldRef::Int16(&mut self.pattern_type),
            "BoundaryPathCount" => FieldRef::Int32(&mut self.boundary_path_count),
            "SeedPointCount" => FieldRef::Int32(&mut self.seed_point_count),
            _ => return None,
        })
    }

    fn coerce(&mut self, name: &str, raw: &str) -> Option<Result<(), SetFieldError>> {
        match name {
            "SolidFillFlag" => return Some(parse_flag(name, raw).map(|v| self.solid_fill_flag = v)),
            "AssociativeFlag" => return Some(parse_flag(name, raw).map(|v| self.associative_flag = v)),
            "PathTypeFlags" => return Some(self.begin_path(name, raw)),
            "HatchStyle" | "PatternType" | "SeedPointCount" => {
                self.section = HatchSection::Pattern;
                return None;
            }
            _ => {}
        }
        match self.section {
            HatchSection::Elevation => match name {
                "ElevationX" | "ElevationY" | "ElevationZ" | "PatternName" | "BoundaryPathCount" => None,
                "PatternScale" | "PatternAngle" => None,
                _ => Some(Ok(())),
            },
            HatchSection::Boundary => match self.paths.last_mut() {
                Some(path) => Some(path.set(name, raw)),
                None => Some(Ok(())),
            },
            HatchSection::Pattern => match name {
                "PatternScale" | "PatternAngle" | "PatternName" => None,
                // Seed points and pattern definition lines
                _ => Some(Ok(())),
            },
        }
    }

    fn into_entity(self) -> Result<EntityType, StructuralError> {
        let mut boundary_paths = Vec::with_capacity(self.paths.len());
        let mut skipped_paths = 0;
        for path in self.paths {
            match path.build()? {
                Some(path) => boundary_paths.push(path),
                None => skipped_paths += 1,
            }
        }
        if skipped_paths > 0 {
            tracing::debug!(skipped_paths, "HATCH boundary paths with ellipse or spline edges skipped");
        }

        Ok(EntityType::Hatch(Hatch {
            common: self.common.into_common(),
            elevation_point: GeoPoint::new(self.elevation_x, self.elevation_y, self.elevation_z),
            pattern_name: self.pattern_name,
            has_solid_fill: self.solid_fill_flag,
            is_associative: self.associative_flag,
            style: HatchStyleType::from_value(self.hatch_style),
            pattern_type: HatchPatternType::from_value(self.pattern_type),
            pattern_angle: self.pattern_angle,
            pattern_scale: self.pattern_scale,
            seed_point_count: self.seed_point_count,
            boundary_paths,
            skipped_paths,
        }))
    }
}
