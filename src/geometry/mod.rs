//! Planar geometry used by entity boundaries
//!
//! A drawing segment is either a straight line or a circular arc. Both are
//! represented by [`GeoLine`]: two end points plus a [`Bulge`], where a bulge
//! of zero means "straight". [`GeoPolyline`] chains segments together and
//! computes exact length and enclosed area, arcs included.

mod bulge;
mod line;
mod point;
mod polyline;

pub use bulge::Bulge;
pub use line::GeoLine;
pub use point::GeoPoint;
pub use polyline::GeoPolyline;

/// Bit pattern used for hashing floats, with `-0.0` folded onto `0.0` so
/// that values comparing equal also hash equal.
#[inline]
pub(crate) fn hash_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}
