//! Arc-shape parameter of a segment

use std::f64::consts::PI;

use super::GeoPoint;

/// Signed bulge of a segment.
///
/// Zero means the segment is straight. Otherwise `|bulge| = tan(θ/4)` where
/// `θ` is the included angle of the arc, and a positive value means the arc
/// runs counter-clockwise from the first point to the second. Radius and
/// angle are always derived from the bulge and the two end points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bulge(f64);

impl Bulge {
    /// A straight segment
    pub const ZERO: Bulge = Bulge(0.0);

    /// Wrap a raw bulge value
    pub const fn new(value: f64) -> Self {
        Bulge(value)
    }

    /// Bulge of an arc sweeping `angle` radians (negative for clockwise)
    pub fn from_angle(angle: f64) -> Self {
        Bulge((angle / 4.0).tan())
    }

    /// Get the raw value
    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether the segment is straight
    #[inline]
    pub fn is_straight(&self) -> bool {
        self.0 == 0.0
    }

    /// Whether the arc runs counter-clockwise
    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.0 > 0.0
    }

    /// Included angle in radians, always non-negative. A straight segment
    /// reports `π`.
    pub fn angle(&self) -> f64 {
        if self.is_straight() {
            PI
        } else {
            4.0 * self.0.abs().atan()
        }
    }

    /// Radius of the arc through `p0` and `p1`; `+∞` for a straight segment.
    pub fn radius(&self, p0: &GeoPoint, p1: &GeoPoint) -> f64 {
        if self.is_straight() {
            return f64::INFINITY;
        }
        p0.distance(p1) / (2.0 * (self.angle() / 2.0).sin())
    }
}

impl From<f64> for Bulge {
    fn from(value: f64) -> Self {
        Bulge(value)
    }
}
