//! Property tests for bulge and polyline geometry

use dxf_lite::{Bulge, GeoLine, GeoPoint, GeoPolyline, StructuralError};
use proptest::prelude::*;

fn shoelace(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len();
    (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            x[i] * y[j] - x[j] * y[i]
        })
        .sum::<f64>()
        / 2.0
}

fn coords() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 2..24)
        .prop_map(|points| points.into_iter().unzip())
}

proptest! {
    #[test]
    fn straight_closed_area_matches_shoelace((x, y) in coords()) {
        let polyline = GeoPolyline::from_points(&x, &y, true).unwrap();
        let expected = shoelace(&x, &y);
        let tolerance = 1e-9 * (1.0 + expected.abs()) * x.len() as f64 * 1e3;
        prop_assert!((polyline.signed_area() - expected).abs() <= tolerance);
        prop_assert_eq!(polyline.segment_count(), x.len());
    }

    #[test]
    fn straight_length_is_sum_of_distances((x, y) in coords(), closed in any::<bool>()) {
        let polyline = GeoPolyline::from_points(&x, &y, closed).unwrap();
        let n = x.len();
        let segments = if closed { n } else { n - 1 };
        let expected: f64 = (0..segments)
            .map(|i| {
                let j = (i + 1) % n;
                GeoPoint::xy(x[i], y[i]).distance(&GeoPoint::xy(x[j], y[j]))
            })
            .sum();
        prop_assert!((polyline.length() - expected).abs() <= 1e-9 * (1.0 + expected));
    }

    #[test]
    fn bulge_radius_matches_half_chord(value in prop_oneof![-50.0f64..-0.01, 0.01f64..50.0]) {
        let p0 = GeoPoint::xy(0.0, 0.0);
        let p1 = GeoPoint::xy(2.0, 0.0);
        let bulge = Bulge::new(value);
        let angle = 4.0 * value.abs().atan();
        prop_assert!((bulge.angle() - angle).abs() < 1e-12);
        prop_assert!((bulge.radius(&p0, &p1) * (angle / 2.0).sin() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn reversed_winding_negates_area((x, y) in coords()) {
        let forward = GeoPolyline::from_points(&x, &y, true).unwrap();
        let rx: Vec<f64> = x.iter().rev().copied().collect();
        let ry: Vec<f64> = y.iter().rev().copied().collect();
        let backward = GeoPolyline::from_points(&rx, &ry, true).unwrap();
        let scale = 1e-9 * (1.0 + forward.area()) * x.len() as f64 * 1e3;
        prop_assert!((forward.signed_area() + backward.signed_area()).abs() <= scale);
    }
}

#[test]
fn test_single_straight_segment() {
    let polyline = GeoPolyline::new(&[0.0, 1.0], &[0.0, 0.0], &[0.0], false).unwrap();
    assert_eq!(polyline.segment_count(), 1);
    assert!(!polyline.is_closed());
    assert_eq!(polyline.length(), 1.0);
    assert_eq!(polyline.segments()[0], GeoLine::straight(GeoPoint::ORIGIN, GeoPoint::xy(1.0, 0.0)));
}

#[test]
fn test_construction_errors() {
    assert!(matches!(
        GeoPolyline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0], &[0.0, 0.0, 0.0], false),
        Err(StructuralError::MismatchedLengths { x: 3, y: 2, bulges: 3 })
    ));
    assert!(matches!(
        GeoPolyline::new(&[0.0, 1.0], &[0.0, 1.0], &[0.0], true),
        Err(StructuralError::MismatchedLengths { x: 2, y: 2, bulges: 1 })
    ));
    assert!(matches!(
        GeoPolyline::new(&[0.0], &[0.0], &[0.0], false),
        Err(StructuralError::TooFewVertices(1))
    ));
    assert!(matches!(GeoPolyline::from_segments(Vec::new()), Err(StructuralError::TooFewVertices(0))));
}
