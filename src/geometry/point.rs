//! Coordinate triple

use std::fmt;
use std::hash::{Hash, Hasher};

use super::hash_bits;

/// A point in drawing coordinates. Equality is exact, field by field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl GeoPoint {
    /// The point (0, 0, 0)
    pub const ORIGIN: GeoPoint = GeoPoint::new(0.0, 0.0, 0.0);

    /// Create a point
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        GeoPoint { x, y, z }
    }

    /// A point on the XY plane
    pub const fn xy(x: f64, y: f64) -> Self {
        GeoPoint { x, y, z: 0.0 }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &GeoPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Midpoint between this point and another
    pub fn midpoint(&self, other: &GeoPoint) -> GeoPoint {
        GeoPoint::new(
            (self.x + other.x) / 2.0,
            (self.y + other.y) / 2.0,
            (self.z + other.z) / 2.0,
        )
    }
}

// NaN coordinates never come out of the reader: coercion rejects them.
impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bits(self.x).hash(state);
        hash_bits(self.y).hash(state);
        hash_bits(self.z).hash(state);
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
