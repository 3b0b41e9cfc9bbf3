use super::{AttrMap, GraphicElement};
use crate::errors::{Error, Result};
use crate::geometry::Point;
use crate::path::{PathSyntax, SvgPathSyntax};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn from_attrs(attrs: &AttrMap) -> Result<Self> {
        Ok(Self::new(
            attrs.number_or("x1", 0.)?,
            attrs.number_or("y1", 0.)?,
            attrs.number_or("x2", 0.)?,
            attrs.number_or("y2", 0.)?,
        ))
    }
}

impl GraphicElement for Line {
    fn tag(&self) -> &'static str {
        "line"
    }

    fn path_repr(&self) -> String {
        format!("M {},{} L {},{}", self.x1, self.y1, self.x2, self.y2)
    }

    fn svg_repr(&self) -> String {
        format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// Parse a `points` attribute: at least two coordinate pairs separated by
/// whitespace and/or commas.
pub fn parse_points(value: &str) -> Result<Vec<Point>> {
    let invalid = || Error::InvalidValue("points".to_owned(), value.to_owned());

    let mut ps = SvgPathSyntax::new(value);
    let mut numbers = Vec::new();
    ps.skip_wsp_comma();
    while !ps.at_end() {
        if !ps.at_number() {
            return Err(invalid());
        }
        numbers.push(ps.read_number().map_err(|_| invalid())?);
        ps.skip_wsp_comma();
    }
    if numbers.len() < 4 || numbers.len() % 2 != 0 {
        return Err(invalid());
    }
    Ok(numbers
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect())
}

fn points_path(points: &[Point], closed: bool) -> String {
    let mut parts: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(idx, p)| format!("{} {},{}", if idx == 0 { 'M' } else { 'L' }, p.x, p.y))
        .collect();
    if closed {
        parts.push("Z".to_owned());
    }
    parts.join(" ")
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// An open sequence of connected straight lines
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn from_attrs(attrs: &AttrMap) -> Result<Self> {
        Ok(Self {
            points: parse_points(attrs.require("points")?)?,
        })
    }
}

impl GraphicElement for Polyline {
    fn tag(&self) -> &'static str {
        "polyline"
    }

    fn path_repr(&self) -> String {
        points_path(&self.points, false)
    }

    fn svg_repr(&self) -> String {
        format!(r#"<polyline points="{}"/>"#, points_attr(&self.points))
    }
}

/// A closed shape of straight lines
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn from_attrs(attrs: &AttrMap) -> Result<Self> {
        Ok(Self {
            points: parse_points(attrs.require("points")?)?,
        })
    }
}

impl GraphicElement for Polygon {
    fn tag(&self) -> &'static str {
        "polygon"
    }

    fn path_repr(&self) -> String {
        points_path(&self.points, true)
    }

    fn svg_repr(&self) -> String {
        format!(r#"<polygon points="{}"/>"#, points_attr(&self.points))
    }
}
