use super::*;
use kurbo::PathEl;

#[test]
fn smoothing_radius_subtracts_half_width() {
    assert_eq!(corner_smoothing_radius(20.0, 5.0), 15.0);
    assert_eq!(corner_smoothing_radius(3.0, 5.0), 0.0);
    assert_eq!(corner_smoothing_radius(0.0, 5.0), 0.0);
}

#[test]
fn rebuild_insets_top_and_sides_and_touches_bottom() {
    let mut b = BorderPath::new();
    b.rebuild(Rect::new(0.0, 0.0, 100.0, 50.0), 10.0, 20.0);
    assert_eq!(b.corner_radius(), 15.0);

    let els = b.outline().elements();
    assert_eq!(els.len(), 5);
    assert_eq!(els[0], PathEl::MoveTo(Point::new(5.0, 5.0)));
    assert_eq!(els[1], PathEl::LineTo(Point::new(95.0, 5.0)));
    assert_eq!(els[2], PathEl::LineTo(Point::new(95.0, 50.0)));
    assert_eq!(els[3], PathEl::LineTo(Point::new(5.0, 50.0)));
    assert_eq!(els[4], PathEl::ClosePath);
}

#[test]
fn repeated_rebuilds_keep_a_single_outline() {
    let mut b = BorderPath::new();
    for _ in 0..5 {
        b.rebuild(Rect::new(0.0, 0.0, 100.0, 50.0), 10.0, 20.0);
    }
    assert_eq!(b.outline().elements().len(), 5);
    assert_eq!(b.path().elements().len(), 9);
    let closes = b
        .path()
        .elements()
        .iter()
        .filter(|e| matches!(e, PathEl::ClosePath))
        .count();
    assert_eq!(closes, 1);
}

#[test]
fn zero_radius_strokes_the_plain_polygon() {
    let mut b = BorderPath::new();
    b.rebuild(Rect::new(0.0, 0.0, 40.0, 40.0), 4.0, 0.0);
    assert_eq!(b.corner_radius(), 0.0);
    assert_eq!(b.path().elements(), b.outline().elements());
}

#[test]
fn arcs_are_clamped_to_half_the_edge() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    let mut out = BezPath::new();
    round_polygon_corners(&pts, 100.0, &mut out);
    assert_eq!(out.elements()[0], PathEl::MoveTo(Point::new(0.0, 5.0)));
    assert_eq!(
        out.elements()[1],
        PathEl::QuadTo(Point::new(0.0, 0.0), Point::new(5.0, 0.0))
    );
}

#[test]
fn degenerate_polygons_are_ignored() {
    let mut out = BezPath::new();
    round_polygon_corners(&[Point::ZERO, Point::new(1.0, 1.0)], 2.0, &mut out);
    assert!(out.elements().is_empty());
}
