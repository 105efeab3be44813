//! DXF text builders.

#![allow(dead_code)]

/// Assembles ASCII DXF text pair by pair, formatting group codes the way
/// AutoCAD does (right-aligned in three columns).
#[derive(Debug, Default, Clone)]
pub struct DxfBuilder {
    text: String,
}

impl DxfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pair(mut self, code: i16, value: impl std::fmt::Display) -> Self {
        self.text.push_str(&format!("{:>3}\n{}\n", code, value));
        self
    }

    pub fn section(self, name: &str) -> Self {
        self.pair(0, "SECTION").pair(2, name)
    }

    pub fn end_section(self) -> Self {
        self.pair(0, "ENDSEC")
    }

    pub fn eof(self) -> Self {
        self.pair(0, "EOF")
    }

    pub fn header_var(self, name: &str, code: i16, value: impl std::fmt::Display) -> Self {
        self.pair(9, name).pair(code, value)
    }

    pub fn line(self, start: (f64, f64), end: (f64, f64)) -> Self {
        self.pair(0, "LINE")
            .pair(8, "0")
            .pair(10, start.0)
            .pair(20, start.1)
            .pair(30, 0.0)
            .pair(11, end.0)
            .pair(21, end.1)
            .pair(31, 0.0)
    }

    pub fn circle(self, center: (f64, f64), radius: f64) -> Self {
        self.pair(0, "CIRCLE")
            .pair(10, center.0)
            .pair(20, center.1)
            .pair(30, 0.0)
            .pair(40, radius)
    }

    /// LWPOLYLINE from `(x, y, bulge)` vertices
    pub fn lwpolyline(self, vertices: &[(f64, f64, f64)], closed: bool) -> Self {
        let mut builder = self
            .pair(0, "LWPOLYLINE")
            .pair(100, "AcDbPolyline")
            .pair(90, vertices.len())
            .pair(70, if closed { 1 } else { 0 });
        for &(x, y, bulge) in vertices {
            builder = builder.pair(10, x).pair(20, y);
            if bulge != 0.0 {
                builder = builder.pair(42, bulge);
            }
        }
        builder
    }

    /// Start a HATCH up to and including its boundary path count
    pub fn hatch_start(self, pattern: &str, solid_fill: &str, path_count: usize) -> Self {
        self.pair(0, "HATCH")
            .pair(100, "AcDbHatch")
            .pair(10, 0.0)
            .pair(20, 0.0)
            .pair(30, 0.0)
            .pair(210, 0.0)
            .pair(220, 0.0)
            .pair(230, 1.0)
            .pair(2, pattern)
            .pair(70, solid_fill)
            .pair(71, 0)
            .pair(91, path_count)
    }

    /// Polyline boundary path from `(x, y, bulge)` vertices
    pub fn hatch_polyline_path(self, flags: i32, vertices: &[(f64, f64, f64)]) -> Self {
        let has_bulge = vertices.iter().any(|v| v.2 != 0.0);
        let mut builder = self
            .pair(92, flags | 2)
            .pair(72, if has_bulge { 1 } else { 0 })
            .pair(73, 1)
            .pair(93, vertices.len());
        for &(x, y, bulge) in vertices {
            builder = builder.pair(10, x).pair(20, y);
            if has_bulge {
                builder = builder.pair(42, bulge);
            }
        }
        builder.pair(97, 0)
    }

    /// Pattern data and seed points that close a HATCH
    pub fn hatch_end(self) -> Self {
        self.pair(75, 1)
            .pair(76, 1)
            .pair(52, 0.0)
            .pair(41, 1.0)
            .pair(77, 0)
            .pair(78, 0)
            .pair(98, 1)
            .pair(10, 0.5)
            .pair(20, 0.5)
    }

    pub fn build(self) -> String {
        self.text
    }
}

/// A drawing with a header and one entity of every supported type
pub fn sample_drawing() -> String {
    DxfBuilder::new()
        .section("HEADER")
        .header_var("$ACADVER", 1, "AC1015")
        .header_var("$DWGCODEPAGE", 3, "ANSI_1252")
        .pair(9, "$INSBASE")
        .pair(10, 0.0)
        .pair(20, 0.0)
        .pair(30, 0.0)
        .header_var("$LTSCALE", 40, 1.0)
        .header_var("$INSUNITS", 70, 4)
        .end_section()
        .section("TABLES")
        .pair(0, "TABLE")
        .pair(2, "LAYER")
        .pair(0, "ENDTAB")
        .end_section()
        .section("ENTITIES")
        .line((0.0, 0.0), (3.0, 4.0))
        .circle((5.0, 5.0), 2.0)
        .pair(0, "ARC")
        .pair(8, "Arcs")
        .pair(10, 0.0)
        .pair(20, 0.0)
        .pair(40, 1.0)
        .pair(50, 0.0)
        .pair(51, 180.0)
        .lwpolyline(&[(0.0, 0.0, 0.0), (4.0, 0.0, 1.0), (4.0, 2.0, 0.0), (0.0, 2.0, 0.0)], true)
        .hatch_start("SOLID", "1", 1)
        .hatch_polyline_path(1, &[(0.0, 0.0, 0.0), (2.0, 0.0, 0.0), (2.0, 2.0, 0.0), (0.0, 2.0, 0.0)])
        .hatch_end()
        .end_section()
        .eof()
        .build()
}
