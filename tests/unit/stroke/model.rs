use super::*;
use crate::foundation::core::Point;

fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((x0, y0));
    p.line_to((x1, y1));
    p
}

#[test]
fn line_length_is_euclidean() {
    let s = Stroke::new(line(0.0, 0.0, 3.0, 4.0)).unwrap();
    assert!((s.length - 5.0).abs() < 1e-9);
}

#[test]
fn polyline_sums_segments() {
    let s = Stroke::from_svg("M0,0 L10,0 L10,20").unwrap();
    assert!((s.length - 30.0).abs() < 1e-9);
}

#[test]
fn quarter_circle_arc_length_is_close() {
    // Cubic approximation of a radius-100 quarter circle.
    let k = 0.552_284_749_8 * 100.0;
    let mut p = BezPath::new();
    p.move_to((100.0, 0.0));
    p.curve_to((100.0, k), (k, 100.0), (0.0, 100.0));
    let s = Stroke::new(p).unwrap();
    let expected = std::f64::consts::FRAC_PI_2 * 100.0;
    assert!((s.length - expected).abs() < 0.1, "got {}", s.length);
}

#[test]
fn empty_path_measures_zero() {
    let s = Stroke::new(BezPath::new()).unwrap();
    assert_eq!(s.length, 0.0);
}

#[test]
fn non_finite_points_are_rejected() {
    let err = Stroke::new(line(0.0, 0.0, f64::NAN, 1.0)).unwrap_err();
    assert!(matches!(err, StrokeError::Geometry(_)));
}

#[test]
fn svg_errors_name_the_stroke() {
    let err = StrokeSet::from_svg_paths(["M0,0 L1,1", "   "]).unwrap_err();
    assert!(err.to_string().contains("stroke 1"), "{err}");
}

#[test]
fn check_indices_reports_first_bad_entry() {
    let set = StrokeSet::from_svg_paths(["M0,0 L1,0", "M0,0 L2,0"]).unwrap();
    assert!(set.check_indices(&[1, 0, 1]).is_ok());
    assert!(set.check_indices(&[]).is_ok());
    let err = set.check_indices(&[0, 2]).unwrap_err();
    assert!(err.to_string().contains("index 2 at position 1"), "{err}");
}

#[test]
fn lengths_follow_index_order() {
    let set =
        StrokeSet::from_paths([line(0.0, 0.0, 10.0, 0.0), line(0.0, 0.0, 0.0, 20.0)]).unwrap();
    let lengths = set.lengths();
    assert_eq!(lengths.len(), 2);
    assert!((lengths[0] - 10.0).abs() < 1e-9);
    assert!((lengths[1] - 20.0).abs() < 1e-9);
}

#[test]
fn bounds_union_skips_empty_strokes() {
    let set = StrokeSet::from_paths([
        line(0.0, 0.0, 10.0, 5.0),
        BezPath::new(),
        line(-2.0, 1.0, 4.0, 8.0),
    ])
    .unwrap();
    let b = set.bounds().unwrap();
    assert_eq!(b.origin(), Point::new(-2.0, 0.0));
    assert_eq!((b.width(), b.height()), (12.0, 8.0));

    let empty = StrokeSet::from_paths([BezPath::new()]).unwrap();
    assert!(empty.bounds().is_none());
}
