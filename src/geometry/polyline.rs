//! Chain of line-or-arc segments

use std::slice;

use super::{Bulge, GeoLine, GeoPoint};
use crate::error::StructuralError;

/// End points closer than this close an outline built from segments
pub const CLOSURE_TOLERANCE: f64 = 1e-9;

/// An ordered, optionally closed sequence of [`GeoLine`] segments.
///
/// Always holds at least one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPolyline {
    lines: Vec<GeoLine>,
    closed: bool,
}

impl GeoPolyline {
    /// Build from parallel vertex lists on the XY plane.
    ///
    /// `bulges[i]` shapes the segment leaving vertex `i`, so an open
    /// polyline may omit the bulge of its last vertex. When `closed` is set,
    /// one extra segment runs from the last vertex back to the first using
    /// the last bulge, and every vertex needs a bulge.
    pub fn new(x: &[f64], y: &[f64], bulges: &[f64], closed: bool) -> Result<Self, StructuralError> {
        let per_segment = !closed && bulges.len() + 1 == x.len();
        if x.len() != y.len() || (x.len() != bulges.len() && !per_segment) {
            return Err(StructuralError::MismatchedLengths {
                x: x.len(),
                y: y.len(),
                bulges: bulges.len(),
            });
        }
        if x.len() < 2 {
            return Err(StructuralError::TooFewVertices(x.len()));
        }

        let vertex = |i: usize| GeoPoint::xy(x[i], y[i]);
        let mut lines: Vec<GeoLine> = (0..x.len() - 1)
            .map(|i| GeoLine::new(vertex(i), vertex(i + 1), Bulge::new(bulges[i])))
            .collect();

        if closed {
            let last = x.len() - 1;
            lines.push(GeoLine::new(vertex(last), vertex(0), Bulge::new(bulges[last])));
        }

        Ok(GeoPolyline { lines, closed })
    }

    /// Build from vertex lists with every segment straight
    pub fn from_points(x: &[f64], y: &[f64], closed: bool) -> Result<Self, StructuralError> {
        GeoPolyline::new(x, y, &vec![0.0; x.len()], closed)
    }

    /// Build from already-formed segments, e.g. the edges of a hatch
    /// boundary. The outline counts as closed when the last segment ends
    /// within [`CLOSURE_TOLERANCE`] of where the first begins.
    pub fn from_segments(lines: Vec<GeoLine>) -> Result<Self, StructuralError> {
        let (first, last) = match (lines.first(), lines.last()) {
            (Some(first), Some(last)) => (first.point0(), last.point1()),
            _ => return Err(StructuralError::TooFewVertices(0)),
        };
        Ok(GeoPolyline {
            closed: first.distance(&last) <= CLOSURE_TOLERANCE,
            lines,
        })
    }

    /// Whether the last segment returns to the first vertex
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Segments in order
    pub fn segments(&self) -> &[GeoLine] {
        &self.lines
    }

    /// Number of segments
    pub fn segment_count(&self) -> usize {
        self.lines.len()
    }

    /// Iterate over the segments
    pub fn iter(&self) -> slice::Iter<'_, GeoLine> {
        self.lines.iter()
    }

    /// Whether any segment is an arc
    pub fn has_bulges(&self) -> bool {
        self.lines.iter().any(GeoLine::has_bulge)
    }

    /// Sum of segment lengths, arcs measured along the arc
    pub fn length(&self) -> f64 {
        self.lines.iter().map(GeoLine::length).sum()
    }

    /// Enclosed area with counter-clockwise outlines positive.
    ///
    /// Every segment contributes its chord through the shoelace term; arcs
    /// then add or remove their circular-segment area according to the sign
    /// of their bulge. For an open polyline the sum covers the existing
    /// segments only.
    pub fn signed_area(&self) -> f64 {
        self.lines.iter().map(GeoLine::signed_area_contribution).sum()
    }

    /// Enclosed area regardless of winding
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Whether `point` lies inside the outline, arcs included.
    ///
    /// Casts a ray along +x against the chords, then flips the result for
    /// every arc whose bulge region holds the point. Treats the outline as
    /// closed.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let mut inside = false;
        for line in &self.lines {
            let (a, b) = (line.point0(), line.point1());
            if (a.y > point.y) != (b.y > point.y) {
                let x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if point.x < x {
                    inside = !inside;
                }
            }
            if line.bulge_region_contains(point) {
                inside = !inside;
            }
        }
        inside
    }
}

impl<'a> IntoIterator for &'a GeoPolyline {
    type Item = &'a GeoLine;
    type IntoIter = slice::Iter<'a, GeoLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_single_segment() {
        let poly = GeoPolyline::new(&[0.0, 1.0], &[0.0, 0.0], &[0.0], false).unwrap();
        assert_eq!(poly.segment_count(), 1);
        assert_eq!(poly.length(), 1.0);

        let poly = GeoPolyline::new(&[0.0, 1.0], &[0.0, 0.0], &[0.0, 0.0], false).unwrap();
        assert_eq!(poly.segment_count(), 1);
    }

    #[test]
    fn test_closed_needs_a_bulge_per_vertex() {
        let err = GeoPolyline::new(&[0.0, 1.0, 1.0], &[0.0, 0.0, 1.0], &[0.0, 0.0], true).unwrap_err();
        assert_eq!(err, StructuralError::MismatchedLengths { x: 3, y: 3, bulges: 2 });
    }

    #[test]
    fn test_mismatched_lengths() {
        let err = GeoPolyline::new(&[0.0, 1.0, 2.0], &[0.0, 0.0], &[0.0, 0.0, 0.0], false).unwrap_err();
        assert_eq!(err, StructuralError::MismatchedLengths { x: 3, y: 2, bulges: 3 });
    }

    #[test]
    fn test_too_few_vertices() {
        let err = GeoPolyline::new(&[1.0], &[1.0], &[0.0], true).unwrap_err();
        assert_eq!(err, StructuralError::TooFewVertices(1));
        assert!(GeoPolyline::from_points(&[], &[], false).is_err());
        assert!(GeoPolyline::from_segments(Vec::new()).is_err());
    }

    #[test]
    fn test_closed_square() {
        let square = GeoPolyline::from_points(&[0.0, 2.0, 2.0, 0.0], &[0.0, 0.0, 2.0, 2.0], true).unwrap();
        assert_eq!(square.segment_count(), 4);
        assert_eq!(square.length(), 8.0);
        assert_eq!(square.signed_area(), 4.0);
        assert_eq!(square.area(), 4.0);
    }

    #[test]
    fn test_clockwise_square_is_negative() {
        let square = GeoPolyline::from_points(&[0.0, 0.0, 2.0, 2.0], &[0.0, 2.0, 2.0, 0.0], true).unwrap();
        assert_eq!(square.signed_area(), -4.0);
        assert_eq!(square.area(), 4.0);
    }

    #[test]
    fn test_closing_segment_uses_last_bulge() {
        let poly = GeoPolyline::new(&[0.0, 2.0], &[0.0, 0.0], &[0.0, 1.0], true).unwrap();
        let closing = poly.segments()[1];
        assert_eq!(closing.point0(), GeoPoint::xy(2.0, 0.0));
        assert_eq!(closing.point1(), GeoPoint::xy(0.0, 0.0));
        assert_eq!(closing.bulge().value(), 1.0);
    }

    #[test]
    fn test_full_circle_from_two_semicircles() {
        let circle = GeoPolyline::new(&[0.0, 2.0], &[0.0, 0.0], &[1.0, 1.0], true).unwrap();
        assert!((circle.length() - 2.0 * PI).abs() < EPS);
        assert!((circle.signed_area() - PI).abs() < EPS);
    }

    #[test]
    fn test_clockwise_circle() {
        let circle = GeoPolyline::new(&[0.0, 2.0], &[0.0, 0.0], &[-1.0, -1.0], true).unwrap();
        assert!((circle.signed_area() + PI).abs() < EPS);
        assert!((circle.area() - PI).abs() < EPS);
    }

    #[test]
    fn test_slot_shape() {
        // 4x2 rectangle with a semicircular cap bulging out of the right side.
        let slot = GeoPolyline::new(
            &[0.0, 4.0, 4.0, 0.0],
            &[0.0, 0.0, 2.0, 2.0],
            &[0.0, 1.0, 0.0, 0.0],
            true,
        )
        .unwrap();
        assert!((slot.area() - (8.0 + PI / 2.0)).abs() < EPS);
        assert!((slot.length() - (4.0 + PI + 4.0 + 2.0)).abs() < EPS);
    }

    #[test]
    fn test_notch_removes_area() {
        // Same rectangle, cap bulging inwards instead.
        let notched = GeoPolyline::new(
            &[0.0, 4.0, 4.0, 0.0],
            &[0.0, 0.0, 2.0, 2.0],
            &[0.0, -1.0, 0.0, 0.0],
            true,
        )
        .unwrap();
        assert!((notched.area() - (8.0 - PI / 2.0)).abs() < EPS);
    }

    #[test]
    fn test_contains_follows_arcs() {
        let slot = GeoPolyline::new(
            &[0.0, 4.0, 4.0, 0.0],
            &[0.0, 0.0, 2.0, 2.0],
            &[0.0, 1.0, 0.0, 0.0],
            true,
        )
        .unwrap();
        assert!(slot.contains(&GeoPoint::xy(2.0, 1.0)));
        // Inside the cap, outside the chord rectangle
        assert!(slot.contains(&GeoPoint::xy(4.5, 1.0)));
        assert!(!slot.contains(&GeoPoint::xy(5.5, 1.0)));
        assert!(!slot.contains(&GeoPoint::xy(-1.0, 1.0)));

        let notched = GeoPolyline::new(
            &[0.0, 4.0, 4.0, 0.0],
            &[0.0, 0.0, 2.0, 2.0],
            &[0.0, -1.0, 0.0, 0.0],
            true,
        )
        .unwrap();
        assert!(!notched.contains(&GeoPoint::xy(3.5, 1.0)));
        assert!(notched.contains(&GeoPoint::xy(2.0, 1.0)));
    }

    #[test]
    fn test_contains_full_circle() {
        let circle = GeoPolyline::new(&[0.0, 2.0], &[0.0, 0.0], &[1.0, 1.0], true).unwrap();
        assert!(circle.contains(&GeoPoint::xy(1.0, 0.5)));
        assert!(circle.contains(&GeoPoint::xy(1.0, -0.5)));
        assert!(!circle.contains(&GeoPoint::xy(1.0, 1.5)));
    }

    #[test]
    fn test_from_segments_detects_closure() {
        let a = GeoPoint::xy(0.0, 0.0);
        let b = GeoPoint::xy(1.0, 0.0);
        let c = GeoPoint::xy(0.0, 1.0);
        let closed = GeoPolyline::from_segments(vec![
            GeoLine::straight(a, b),
            GeoLine::straight(b, c),
            GeoLine::straight(c, a),
        ])
        .unwrap();
        assert!(closed.is_closed());
        assert!((closed.area() - 0.5).abs() < EPS);

        let open = GeoPolyline::from_segments(vec![GeoLine::straight(a, b)]).unwrap();
        assert!(!open.is_closed());
    }
}
