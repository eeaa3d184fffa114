use super::*;
use crate::stroke::model::path_length;

fn l_shape() -> BezPath {
    // 10 units right, then 10 units down.
    BezPath::from_svg("M0,0 L10,0 L10,10").unwrap()
}

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-6
}

#[test]
fn point_at_fraction_walks_arc_length() {
    let p = l_shape();
    assert!(close(point_at_fraction(&p, 0.0).unwrap(), Point::new(0.0, 0.0)));
    assert!(close(point_at_fraction(&p, 0.25).unwrap(), Point::new(5.0, 0.0)));
    assert!(close(point_at_fraction(&p, 0.5).unwrap(), Point::new(10.0, 0.0)));
    assert!(close(point_at_fraction(&p, 0.75).unwrap(), Point::new(10.0, 5.0)));
    assert!(close(point_at_fraction(&p, 1.0).unwrap(), Point::new(10.0, 10.0)));
    assert!(close(point_at_fraction(&p, 3.0).unwrap(), Point::new(10.0, 10.0)));
}

#[test]
fn point_at_fraction_on_degenerate_paths() {
    assert_eq!(point_at_fraction(&BezPath::new(), 0.5), None);
    let dot = BezPath::from_svg("M3,4").unwrap();
    assert_eq!(point_at_fraction(&dot, 0.5), Some(Point::new(3.0, 4.0)));
}

#[test]
fn trim_keeps_requested_share_of_length() {
    let p = l_shape();
    for f in [0.1, 0.5, 0.6, 0.9] {
        let trimmed = trim_to_fraction(&p, f);
        assert!(
            (path_length(&trimmed) - 20.0 * f).abs() < 1e-6,
            "fraction {f}"
        );
    }
    assert!(trim_to_fraction(&p, 0.0).elements().is_empty());
    assert_eq!(trim_to_fraction(&p, 1.0), p);
}

#[test]
fn trim_ends_where_marker_sits() {
    let p = BezPath::from_svg("M0,0 C30,0 30,40 60,40").unwrap();
    let trimmed = trim_to_fraction(&p, 0.4);
    let end = trimmed.segments().last().unwrap().end();
    assert!((end - point_at_fraction(&p, 0.4).unwrap()).hypot() < 1e-2);
}

#[test]
fn fit_centers_and_scales_uniformly() {
    let vp = Viewport::fit(
        Rect::new(0.0, 0.0, 100.0, 50.0),
        Canvas {
            width: 220,
            height: 220,
        },
        10.0,
        false,
    )
    .unwrap();
    assert!((vp.scale - 2.0).abs() < 1e-12);
    assert!(close(vp.map_point(Point::new(50.0, 25.0)), Point::new(110.0, 110.0)));
    assert!(close(vp.map_point(Point::new(0.0, 0.0)), Point::new(10.0, 60.0)));
}

#[test]
fn fit_flip_y_mirrors_vertically() {
    let vp = Viewport::fit(
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Canvas {
            width: 100,
            height: 100,
        },
        0.0,
        true,
    )
    .unwrap();
    assert!(close(vp.map_point(Point::new(0.0, 10.0)), Point::new(0.0, 0.0)));
    assert!(close(vp.map_point(Point::new(0.0, 0.0)), Point::new(0.0, 100.0)));
}

#[test]
fn fit_handles_flat_bounds_and_rejects_points() {
    let canvas = Canvas {
        width: 50,
        height: 50,
    };
    let flat = Viewport::fit(Rect::new(0.0, 5.0, 10.0, 5.0), canvas, 0.0, false).unwrap();
    assert!((flat.scale - 5.0).abs() < 1e-12);

    assert!(Viewport::fit(Rect::new(1.0, 1.0, 1.0, 1.0), canvas, 0.0, false).is_err());
    assert!(Viewport::fit(Rect::new(0.0, 0.0, 1.0, 1.0), canvas, 30.0, false).is_err());
    assert!(Viewport::fit(Rect::new(0.0, 0.0, 1.0, 1.0), canvas, -1.0, false).is_err());
}

#[test]
fn mapped_lengths_scale_with_viewport() {
    let vp = Viewport::fit(
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Canvas {
            width: 30,
            height: 30,
        },
        0.0,
        false,
    )
    .unwrap();
    let p = l_shape();
    let mapped = vp.map_path(&p);
    assert!((path_length(&mapped) - path_length(&p) * vp.scale).abs() < 1e-6);
}
