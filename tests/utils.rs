#![allow(dead_code)]

use svgmarker::geometry::Point;
use svgmarker::{Path, Segment};

/// Evaluate a cubic Bezier at parameter `t`
pub fn cubic_at(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let mt = 1. - t;
    p0 * (mt * mt * mt) + p1 * (3. * mt * mt * t) + p2 * (3. * mt * t * t) + p3 * (t * t * t)
}

/// Points sampled along every cubic segment of `path`
pub fn sample_cubics(path: &Path, t_values: &[f64]) -> Vec<Point> {
    let mut samples = Vec::new();
    let mut prev = Point::ORIGIN;
    for (seg, pos) in path.segments().iter().zip(path.positions()) {
        if let Segment::CubicCurveTo(c1, c2, end) = *seg {
            samples.extend(t_values.iter().map(|&t| cubic_at(prev, c1, c2, end, t)));
        }
        prev = pos;
    }
    samples
}

pub fn assert_near(actual: Point, x: f64, y: f64) {
    assert!(
        actual.distance(Point::new(x, y)) < 1e-9,
        "{actual:?} is not near ({x}, {y})"
    );
}
