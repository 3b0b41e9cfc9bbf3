use super::{check_non_negative, check_positive, AttrMap, GraphicElement};
use crate::errors::Result;

/// A rectangle, optionally with rounded corners.
///
/// Corner radii are clamped to half the width / height, and a radius given
/// for only one axis is used for both.
#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rx: f64,
    pub ry: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64, rx: f64, ry: f64) -> Result<Self> {
        check_positive("width", width)?;
        check_positive("height", height)?;
        check_non_negative("rx", rx)?;
        check_non_negative("ry", ry)?;

        let (mut rx, mut ry) = (rx, ry);
        if rx > width / 2. {
            log::warn!("rect rx {rx} is greater than half of width {width}");
            rx = width / 2.;
        }
        if ry > height / 2. {
            log::warn!("rect ry {ry} is greater than half of height {height}");
            ry = height / 2.;
        }
        if rx > 0. && ry == 0. {
            ry = rx;
        } else if ry > 0. && rx == 0. {
            rx = ry;
        }
        Ok(Self {
            x,
            y,
            width,
            height,
            rx,
            ry,
        })
    }

    pub fn from_attrs(attrs: &AttrMap) -> Result<Self> {
        Self::new(
            attrs.number_or("x", 0.)?,
            attrs.number_or("y", 0.)?,
            attrs.number("width")?,
            attrs.number("height")?,
            attrs.number_or("rx", 0.)?,
            attrs.number_or("ry", 0.)?,
        )
    }

    fn is_rounded(&self) -> bool {
        self.rx > 0. && self.ry > 0.
    }
}

impl GraphicElement for Rect {
    fn tag(&self) -> &'static str {
        "rect"
    }

    /// Clockwise from the end of the top-left corner; each corner is a
    /// quarter arc when rounded.
    fn path_repr(&self) -> String {
        let Self {
            x,
            y,
            width: w,
            height: h,
            rx,
            ry,
        } = *self;
        let corner = |cx: f64, cy: f64| {
            if self.is_rounded() {
                format!("A {rx},{ry} 0,0,1 {cx},{cy} ")
            } else {
                String::new()
            }
        };
        let mut path = format!("M {},{y} L {},{y} ", x + rx, x + w - rx);
        path += &corner(x + w, y + ry);
        path += &format!("L {},{} ", x + w, y + h - ry);
        path += &corner(x + w - rx, y + h);
        path += &format!("L {},{} ", x + rx, y + h);
        path += &corner(x, y + h - ry);
        path += &format!("L {x},{} ", y + ry);
        path += &corner(x + rx, y);
        path += "Z";
        path
    }

    fn svg_repr(&self) -> String {
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}"/>"#,
            self.x, self.y, self.width, self.height, self.rx, self.ry
        )
    }
}
