use super::{check_positive, AttrMap, GraphicElement};
use crate::errors::Result;

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, r: f64) -> Result<Self> {
        check_positive("r", r)?;
        Ok(Self { cx, cy, r })
    }

    pub fn from_attrs(attrs: &AttrMap) -> Result<Self> {
        Self::new(
            attrs.number_or("cx", 0.)?,
            attrs.number_or("cy", 0.)?,
            attrs.number("r")?,
        )
    }
}

impl GraphicElement for Circle {
    fn tag(&self) -> &'static str {
        "circle"
    }

    fn path_repr(&self) -> String {
        ellipse_path(self.cx, self.cy, self.r, self.r)
    }

    fn svg_repr(&self) -> String {
        format!(
            r#"<circle cx="{}" cy="{}" r="{}"/>"#,
            self.cx, self.cy, self.r
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

impl Ellipse {
    pub fn new(cx: f64, cy: f64, rx: f64, ry: f64) -> Result<Self> {
        check_positive("rx", rx)?;
        check_positive("ry", ry)?;
        Ok(Self { cx, cy, rx, ry })
    }

    pub fn from_attrs(attrs: &AttrMap) -> Result<Self> {
        Self::new(
            attrs.number_or("cx", 0.)?,
            attrs.number_or("cy", 0.)?,
            attrs.number("rx")?,
            attrs.number("ry")?,
        )
    }
}

impl GraphicElement for Ellipse {
    fn tag(&self) -> &'static str {
        "ellipse"
    }

    fn path_repr(&self) -> String {
        ellipse_path(self.cx, self.cy, self.rx, self.ry)
    }

    fn svg_repr(&self) -> String {
        format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}"/>"#,
            self.cx, self.cy, self.rx, self.ry
        )
    }
}

/// Four quarter arcs starting and ending at the rightmost point.
fn ellipse_path(cx: f64, cy: f64, rx: f64, ry: f64) -> String {
    let arc = |x: f64, y: f64| format!("A {rx},{ry} 0,1,0 {x},{y}");
    [
        format!("M {},{cy}", cx + rx),
        arc(cx, cy + ry),
        arc(cx - rx, cy),
        arc(cx, cy - ry),
        arc(cx + rx, cy),
        "Z".to_owned(),
    ]
    .join(" ")
}
