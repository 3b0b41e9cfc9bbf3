mod utils;

use assertables::{assert_in_delta, assert_le};
use itertools::Itertools;
use svgmarker::geometry::Point;
use svgmarker::{marker_from_path_data, parse_path, Error, Segment};
use utils::{assert_near, sample_cubics};

#[test]
fn test_square_marker() {
    let marker = marker_from_path_data("M 0,0 L 10,0 L 10,10 L 0,10 Z").unwrap();
    let segs = marker.segments();
    assert_eq!(segs.len(), 5);
    assert!(matches!(segs[0], Segment::MoveTo(_)));
    let positions = marker.positions();
    assert_near(positions[0], -0.5, 0.5);
    assert_near(positions[1], 0.5, 0.5);
    assert_near(positions[2], 0.5, -0.5);
    assert_near(positions[3], -0.5, -0.5);
    assert_eq!(segs[4], Segment::ClosePath);
    assert_near(positions[4], -0.5, 0.5);
}

#[test]
fn test_arc_marker_on_circle() {
    let path = parse_path("M 80,40 A 30,30 0,1,0 50,70").unwrap();
    assert_eq!(path.segments()[0], Segment::MoveTo(Point::new(80., 40.)));
    assert!(path.segments()[1..]
        .iter()
        .all(|s| matches!(s, Segment::CubicCurveTo(..))));

    let center = Point::new(50., 40.);
    for p in sample_cubics(&path, &[0.25, 0.5, 0.75]) {
        assert_in_delta!(p.distance(center), 30., 0.05);
    }
    assert_eq!(
        path.positions().last().copied(),
        Some(Point::new(50., 70.))
    );
}

#[test]
fn test_normalized_unit_box() {
    for data in [
        "M 0,0 L 10,0 L 10,10 L 0,10 Z",
        "M 100 50 Q 120 40 140 50",
        "M 5 5 C 10 -30 40 80 20 20 S 0 0 -5 7",
        "M 80,40 A 30,30 0,1,0 50,70",
        "M 10 10 a 4 9 30 1 1 5 5 t 3 3 Z m 2 2 h 8 v -30",
    ] {
        let marker = marker_from_path_data(data).unwrap();
        let (min_x, max_x) = marker
            .points()
            .map(|p| p.x)
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()
            .unwrap();
        let (min_y, max_y) = marker
            .points()
            .map(|p| p.y)
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()
            .unwrap();
        let (w, h) = (max_x - min_x, max_y - min_y);
        assert_in_delta!(w.max(h), 1., 1e-9);
        assert_in_delta!(min_x + max_x, 0., 1e-9);
        assert_in_delta!(min_y + max_y, 0., 1e-9);
        assert_le!(w.min(h), 1. + 1e-9);
    }
}

#[test]
fn test_normalize_flips_y() {
    // in SVG coordinates the end point is below the start
    let marker = marker_from_path_data("M 0 0 L 0 10").unwrap();
    let positions = marker.positions();
    assert_near(positions[0], 0., 0.5);
    assert_near(positions[1], 0., -0.5);
}

#[test]
fn test_single_point_marker() {
    let marker = marker_from_path_data("M 5,5").unwrap();
    assert_eq!(marker.segments(), &[Segment::MoveTo(Point::ORIGIN)]);
}

#[test]
fn test_smooth_curve_reflection() {
    let path = parse_path("M 0 0 C 10 0 20 10 20 20 S 40 40 40 20").unwrap();
    assert_eq!(
        path.segments()[2],
        Segment::CubicCurveTo(
            Point::new(20., 30.),
            Point::new(40., 40.),
            Point::new(40., 20.)
        )
    );

    let path = parse_path("M 0 0 C 10 0 20 10 20 20 L 30 20 S 40 40 40 20").unwrap();
    assert_eq!(
        path.segments()[3],
        Segment::CubicCurveTo(
            Point::new(30., 20.),
            Point::new(40., 40.),
            Point::new(40., 20.)
        )
    );
}

#[test]
fn test_zero_radius_arc_is_line() {
    let path = parse_path("M 1 1 a 0 3 45 1 1 4 4").unwrap();
    assert_eq!(
        path.segments(),
        &[
            Segment::MoveTo(Point::new(1., 1.)),
            Segment::LineTo(Point::new(5., 5.))
        ]
    );
}

#[test]
fn test_compact_path_data() {
    let compact = parse_path("M10-20l79-90.5.5-1zm1,1c1 2 3 4 5 6").unwrap();
    let spaced = parse_path("M 10 -20 l 79 -90.5 0.5 -1 z m 1 1 c 1 2 3 4 5 6").unwrap();
    assert_eq!(compact, spaced);
}

#[test]
fn test_quadratic_to_cubic_same_shape() {
    let marker = marker_from_path_data("M 0 0 Q 10 20 20 0 T 40 0").unwrap();
    let cubic = marker.to_cubic();
    assert_eq!(marker.len(), cubic.len());
    assert_eq!(marker.positions(), cubic.positions());
    // the midpoint of a quadratic is (p0 + 2c + p2) / 4; check the cubic matches
    if let (Segment::QuadraticCurveTo(c, end), Segment::CubicCurveTo(..)) =
        (marker.segments()[1], cubic.segments()[1])
    {
        let start = marker.positions()[0];
        let mid = (start + c * 2. + end) * 0.25;
        let samples = sample_cubics(&cubic, &[0.5]);
        assert!(samples[0].distance(mid) < 1e-12);
    } else {
        panic!("unexpected segments {marker:?} / {cubic:?}");
    }
}

#[test]
fn test_path_errors() {
    let cases: [(&str, fn(&Error) -> bool); 6] = [
        ("", |e| matches!(e, Error::NoCommandFound)),
        ("L 1 1", |e| matches!(e, Error::PathMustStartWithMoveTo)),
        ("M 0 0 K 1 1", |e| matches!(e, Error::UnknownCommand('K'))),
        ("M 0 0 C 1 1", |e| {
            matches!(e, Error::InvalidArgumentCount('C', 2))
        }),
        ("M 0 0 Z L 1 1", |e| {
            matches!(e, Error::MisplacedCloseOrMove('L'))
        }),
        ("M 0 0 L 1 -", |e| matches!(e, Error::Parse(_))),
    ];
    for (data, check) in cases {
        let err = marker_from_path_data(data).unwrap_err();
        assert!(check(&err), "{data:?} gave {err:?}");
    }
}

#[test]
fn test_error_messages() {
    let err = marker_from_path_data("M 0 0 C 1 2 3 4").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid argument count 4 for path command 'C'"
    );
}
