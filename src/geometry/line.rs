//! Line-or-arc segment

use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{hash_bits, Bulge, GeoPoint};

/// One segment between two points: straight when the bulge is zero, a
/// circular arc otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoLine {
    point0: GeoPoint,
    point1: GeoPoint,
    bulge: Bulge,
}

impl GeoLine {
    /// Create a segment from its defining triple
    pub fn new(point0: GeoPoint, point1: GeoPoint, bulge: Bulge) -> Self {
        GeoLine {
            point0,
            point1,
            bulge,
        }
    }

    /// A straight segment
    pub fn straight(point0: GeoPoint, point1: GeoPoint) -> Self {
        GeoLine::new(point0, point1, Bulge::ZERO)
    }

    /// An arc around `center` from `start_angle` to `end_angle` (radians).
    /// The sweep `end_angle - start_angle` keeps its sign, so a negative
    /// sweep yields a clockwise arc.
    ///
    /// One segment cannot hold a full turn: its end points would meet and
    /// the radius would be lost. Use [`GeoLine::arc_segments`] for sweeps
    /// that may reach `2π`.
    pub fn from_arc(center: GeoPoint, start_angle: f64, end_angle: f64, radius: f64) -> Self {
        let point0 = GeoPoint::new(
            center.x + radius * start_angle.cos(),
            center.y + radius * start_angle.sin(),
            center.z,
        );
        let point1 = GeoPoint::new(
            center.x + radius * end_angle.cos(),
            center.y + radius * end_angle.sin(),
            center.z,
        );
        GeoLine::new(point0, point1, Bulge::from_angle(end_angle - start_angle))
    }

    /// An arc as bulged segments, split at its middle angle when the sweep
    /// exceeds `π` so that no segment's bulge goes past 1.
    pub fn arc_segments(center: GeoPoint, start_angle: f64, end_angle: f64, radius: f64) -> Vec<GeoLine> {
        let sweep = end_angle - start_angle;
        if sweep.abs() <= PI {
            return vec![GeoLine::from_arc(center, start_angle, end_angle, radius)];
        }
        let middle = start_angle + sweep / 2.0;
        vec![
            GeoLine::from_arc(center, start_angle, middle, radius),
            GeoLine::from_arc(center, middle, end_angle, radius),
        ]
    }

    /// Start point
    pub fn point0(&self) -> GeoPoint {
        self.point0
    }

    /// End point
    pub fn point1(&self) -> GeoPoint {
        self.point1
    }

    /// Get the bulge
    pub fn bulge(&self) -> Bulge {
        self.bulge
    }

    /// Whether the segment is an arc
    pub fn has_bulge(&self) -> bool {
        !self.bulge.is_straight()
    }

    /// Straight-line distance between the end points
    pub fn chord_length(&self) -> f64 {
        self.point0.distance(&self.point1)
    }

    /// Distance along the segment: the chord for a line, `radius × angle`
    /// for an arc.
    pub fn length(&self) -> f64 {
        if !self.has_bulge() {
            return self.chord_length();
        }
        self.radius() * self.angle()
    }

    /// Radius of the arc, `+∞` for a straight segment
    pub fn radius(&self) -> f64 {
        self.bulge.radius(&self.point0, &self.point1)
    }

    /// Included angle in radians, `π` for a straight segment
    pub fn angle(&self) -> f64 {
        self.bulge.angle()
    }

    /// Center of the arc, `None` for a straight segment.
    pub fn center(&self) -> Option<GeoPoint> {
        if !self.has_bulge() {
            return None;
        }
        let b = self.bulge.value();
        let mid = self.point0.midpoint(&self.point1);
        let dx = self.point1.x - self.point0.x;
        let dy = self.point1.y - self.point0.y;
        // Offset along the left normal of the chord, scaled by chord length.
        let k = (1.0 - b * b) / (4.0 * b);
        Some(GeoPoint::new(mid.x - dy * k, mid.y + dx * k, self.point0.z))
    }

    /// Area attributed to this segment.
    ///
    /// Straight: the signed trapezoid between the segment and the x-axis,
    /// `(x1 − x0)(y0 + y1)/2`. Arc: the unsigned area of the circular segment
    /// between the arc and its chord, `r²(θ − sin θ)/2`.
    pub fn area(&self) -> f64 {
        if !self.has_bulge() {
            return self.trapezoid_area();
        }
        let r = self.radius();
        let theta = self.angle();
        (r * r * (theta - theta.sin()) / 2.0).abs()
    }

    /// Contribution of this segment to the counter-clockwise-positive area of
    /// a closed outline.
    ///
    /// The chord contributes the negated trapezoid term. An arc adds its
    /// circular-segment area when the bulge is positive (the arc bows to the
    /// right of the direction of travel) and removes it when negative.
    pub fn signed_area_contribution(&self) -> f64 {
        let chord = -self.trapezoid_area();
        if !self.has_bulge() {
            return chord;
        }
        chord + self.bulge.value().signum() * self.area()
    }

    /// Whether `point` lies strictly between the arc and its chord. Always
    /// `false` for a straight segment.
    pub fn bulge_region_contains(&self, point: &GeoPoint) -> bool {
        let Some(center) = self.center() else {
            return false;
        };
        let (dx, dy) = (point.x - center.x, point.y - center.y);
        if (dx * dx + dy * dy).sqrt() >= self.radius() {
            return false;
        }
        let cross = (self.point1.x - self.point0.x) * (point.y - self.point0.y)
            - (self.point1.y - self.point0.y) * (point.x - self.point0.x);
        // Positive bulges bow to the right of the direction of travel.
        if self.bulge.is_counter_clockwise() {
            cross < 0.0
        } else {
            cross > 0.0
        }
    }

    fn trapezoid_area(&self) -> f64 {
        (self.point1.x - self.point0.x) * (self.point0.y + self.point1.y) / 2.0
    }
}

impl PartialEq for GeoLine {
    fn eq(&self, other: &Self) -> bool {
        self.point0 == other.point0
            && self.point1 == other.point1
            && self.bulge.value() == other.bulge.value()
    }
}

impl Eq for GeoLine {}

impl Hash for GeoLine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.point0.hash(state);
        self.point1.hash(state);
        hash_bits(self.bulge.value()).hash(state);
    }
}

impl fmt::Display for GeoLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P0{}, P1{}", self.point0, self.point1)?;
        if self.has_bulge() {
            write!(f, ", bulge {}", self.bulge.value())?;
        }
        Ok(())
    }
}
