use std::fmt;

#[cfg(feature = "json")]
use serde_derive::Serialize;

use crate::constants::DEFAULT_PRECISION;
use crate::fstr_prec;
use crate::geometry::{BoundingBox, Point};

/// A single drawing primitive. The start of each segment is the end of the
/// previous one; `ClosePath` draws back to the start of the current subpath.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize))]
#[cfg_attr(feature = "json", serde(tag = "type", content = "points"))]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    /// control point 1, control point 2, end point
    CubicCurveTo(Point, Point, Point),
    /// control point, end point
    QuadraticCurveTo(Point, Point),
    ClosePath,
}

impl Segment {
    /// Every point of the segment, control points included, in order.
    pub fn points(&self) -> Vec<Point> {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) => vec![p],
            Segment::CubicCurveTo(c1, c2, end) => vec![c1, c2, end],
            Segment::QuadraticCurveTo(c, end) => vec![c, end],
            Segment::ClosePath => vec![],
        }
    }

    /// End point of the segment; `None` for `ClosePath`, whose end
    /// depends on the enclosing subpath.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Segment::MoveTo(p)
            | Segment::LineTo(p)
            | Segment::CubicCurveTo(_, _, p)
            | Segment::QuadraticCurveTo(_, p) => Some(p),
            Segment::ClosePath => None,
        }
    }

    /// Apply `f` to every point of the segment
    pub fn map_points(&self, mut f: impl FnMut(Point) -> Point) -> Self {
        match *self {
            Segment::MoveTo(p) => Segment::MoveTo(f(p)),
            Segment::LineTo(p) => Segment::LineTo(f(p)),
            Segment::CubicCurveTo(c1, c2, end) => Segment::CubicCurveTo(f(c1), f(c2), f(end)),
            Segment::QuadraticCurveTo(c, end) => Segment::QuadraticCurveTo(f(c), f(end)),
            Segment::ClosePath => Segment::ClosePath,
        }
    }

    fn write_data(&self, f: &mut impl fmt::Write, precision: usize) -> fmt::Result {
        let p = |pt: Point| {
            format!(
                "{} {}",
                fstr_prec(pt.x, precision),
                fstr_prec(pt.y, precision)
            )
        };
        match *self {
            Segment::MoveTo(pt) => write!(f, "M {}", p(pt)),
            Segment::LineTo(pt) => write!(f, "L {}", p(pt)),
            Segment::CubicCurveTo(c1, c2, end) => {
                write!(f, "C {} {} {}", p(c1), p(c2), p(end))
            }
            Segment::QuadraticCurveTo(c, end) => write!(f, "Q {} {}", p(c), p(end)),
            Segment::ClosePath => write!(f, "Z"),
        }
    }
}

/// An ordered sequence of segments, possibly made of several subpaths.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct Path {
    segments: Vec<Segment>,
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl Path {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Every point in the path, control points included.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().flat_map(|s| s.points())
    }

    /// Pen position after each segment.
    ///
    /// For `ClosePath` this is the start of the subpath being closed.
    pub fn positions(&self) -> Vec<Point> {
        let mut subpath_start = Point::ORIGIN;
        self.segments
            .iter()
            .map(|seg| match *seg {
                Segment::MoveTo(p) => {
                    subpath_start = p;
                    p
                }
                Segment::ClosePath => subpath_start,
                other => other.end_point().unwrap_or(subpath_start),
            })
            .collect()
    }

    /// Bounding box over every point including control points; this may
    /// be larger than the extent of the drawn curves.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.points())
    }

    pub fn map_points(&self, mut f: impl FnMut(Point) -> Point) -> Self {
        Self::new(self.segments.iter().map(|s| s.map_points(&mut f)).collect())
    }

    /// Equivalent path with each quadratic Bezier raised to a cubic, for
    /// backends lacking a quadratic primitive. The shape is unchanged.
    pub fn to_cubic(&self) -> Self {
        let positions = self.positions();
        let mut start = Point::ORIGIN;
        let mut result = Vec::with_capacity(self.segments.len());
        for (seg, pos) in self.segments.iter().zip(positions) {
            result.push(match *seg {
                Segment::QuadraticCurveTo(c, end) => Segment::CubicCurveTo(
                    start + (c - start) * (2. / 3.),
                    end + (c - end) * (2. / 3.),
                    end,
                ),
                other => other,
            });
            start = pos;
        }
        Self::new(result)
    }

    /// SVG path data for this path with numbers rounded to `precision`
    /// decimal places.
    pub fn to_path_data(&self, precision: usize) -> String {
        let mut out = String::new();
        for (idx, seg) in self.segments.iter().enumerate() {
            if idx > 0 {
                out.push(' ');
            }
            // writing to a String cannot fail
            let _ = seg.write_data(&mut out, precision);
        }
        out
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_data(DEFAULT_PRECISION))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_path_positions() {
        let path = Path::new(vec![
            Segment::MoveTo(pt(1., 1.)),
            Segment::LineTo(pt(5., 1.)),
            Segment::CubicCurveTo(pt(6., 1.), pt(6., 3.), pt(5., 3.)),
            Segment::ClosePath,
            Segment::MoveTo(pt(10., 10.)),
            Segment::QuadraticCurveTo(pt(12., 8.), pt(14., 10.)),
        ]);
        assert_eq!(
            path.positions(),
            vec![
                pt(1., 1.),
                pt(5., 1.),
                pt(5., 3.),
                pt(1., 1.),
                pt(10., 10.),
                pt(14., 10.)
            ]
        );
        assert_eq!(path.points().count(), 9);
    }

    #[test]
    fn test_path_bbox_includes_controls() {
        let path = Path::new(vec![
            Segment::MoveTo(pt(0., 0.)),
            Segment::CubicCurveTo(pt(0., -20.), pt(10., -20.), pt(10., 0.)),
        ]);
        assert_eq!(
            path.bounding_box(),
            Some(BoundingBox::new(0., -20., 10., 0.))
        );
        assert_eq!(Path::default().bounding_box(), None);
    }

    #[test]
    fn test_path_to_cubic() {
        let path = Path::new(vec![
            Segment::MoveTo(pt(0., 0.)),
            Segment::QuadraticCurveTo(pt(3., 6.), pt(6., 0.)),
            Segment::LineTo(pt(6., 6.)),
        ]);
        let cubic = path.to_cubic();
        assert_eq!(
            cubic.segments()[1],
            Segment::CubicCurveTo(pt(2., 4.), pt(4., 4.), pt(6., 0.))
        );
        assert_eq!(cubic.segments()[2], path.segments()[2]);
        assert!(!cubic
            .segments()
            .iter()
            .any(|s| matches!(s, Segment::QuadraticCurveTo(..))));
    }

    #[test]
    fn test_path_data() {
        let path = Path::new(vec![
            Segment::MoveTo(pt(0., 0.)),
            Segment::LineTo(pt(1.23456, -2.)),
            Segment::QuadraticCurveTo(pt(0.5, 0.5), pt(1., 0.)),
            Segment::ClosePath,
        ]);
        assert_eq!(path.to_string(), "M 0 0 L 1.235 -2 Q 0.5 0.5 1 0 Z");
        assert_eq!(path.to_path_data(1), "M 0 0 L 1.2 -2 Q 0.5 0.5 1 0 Z");
    }
}
