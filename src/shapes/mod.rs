//! Basic SVG shapes, each convertible to path data.

mod attrs;
mod ellipse;
mod line;
mod rect;

pub use attrs::AttrMap;
pub use ellipse::{Circle, Ellipse};
pub use line::{parse_points, Line, Polygon, Polyline};
pub use rect::Rect;

use quick_xml::escape::escape;

use crate::errors::{Error, Result};

/// Common behaviour of the graphic elements a marker can be built from.
pub trait GraphicElement {
    /// SVG element name
    fn tag(&self) -> &'static str;

    /// Path data drawing this element's outline
    fn path_repr(&self) -> String;

    /// Minimal SVG element equivalent to this one
    fn svg_repr(&self) -> String;
}

/// A `<path>` element; the path data is used as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct PathElement {
    pub d: String,
}

impl PathElement {
    pub fn new(d: impl Into<String>) -> Self {
        Self { d: d.into() }
    }

    pub fn from_attrs(attrs: &AttrMap) -> Result<Self> {
        Ok(Self::new(attrs.require("d")?))
    }
}

impl GraphicElement for PathElement {
    fn tag(&self) -> &'static str {
        "path"
    }

    fn path_repr(&self) -> String {
        self.d.clone()
    }

    fn svg_repr(&self) -> String {
        format!(r#"<path d="{}"/>"#, escape(self.d.as_str()))
    }
}

/// Any of the supported graphic elements.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Ellipse(Ellipse),
    Line(Line),
    Path(PathElement),
    Polygon(Polygon),
    Polyline(Polyline),
    Rect(Rect),
}

impl Shape {
    /// Element names which produce a `Shape`
    pub const TAGS: [&'static str; 7] = [
        "circle", "ellipse", "line", "path", "polygon", "polyline", "rect",
    ];

    /// Build a shape from an element name and its attributes.
    ///
    /// Returns `Ok(None)` for elements which aren't graphic elements;
    /// attributes not used by the shape are ignored.
    pub fn from_element(name: &str, attrs: &AttrMap) -> Result<Option<Self>> {
        let shape = match name {
            "circle" => Self::Circle(Circle::from_attrs(attrs)?),
            "ellipse" => Self::Ellipse(Ellipse::from_attrs(attrs)?),
            "line" => Self::Line(Line::from_attrs(attrs)?),
            "path" => Self::Path(PathElement::from_attrs(attrs)?),
            "polygon" => Self::Polygon(Polygon::from_attrs(attrs)?),
            "polyline" => Self::Polyline(Polyline::from_attrs(attrs)?),
            "rect" => Self::Rect(Rect::from_attrs(attrs)?),
            _ => return Ok(None),
        };
        Ok(Some(shape))
    }

    fn inner(&self) -> &dyn GraphicElement {
        match self {
            Self::Circle(s) => s,
            Self::Ellipse(s) => s,
            Self::Line(s) => s,
            Self::Path(s) => s,
            Self::Polygon(s) => s,
            Self::Polyline(s) => s,
            Self::Rect(s) => s,
        }
    }
}

impl GraphicElement for Shape {
    fn tag(&self) -> &'static str {
        self.inner().tag()
    }

    fn path_repr(&self) -> String {
        self.inner().path_repr()
    }

    fn svg_repr(&self) -> String {
        self.inner().svg_repr()
    }
}

pub(crate) fn check_positive(attr: &str, value: f64) -> Result<()> {
    if value > 0. {
        Ok(())
    } else {
        Err(Error::InvalidValue(attr.to_owned(), value.to_string()))
    }
}

pub(crate) fn check_non_negative(attr: &str, value: f64) -> Result<()> {
    if value >= 0. {
        Ok(())
    } else {
        Err(Error::InvalidValue(attr.to_owned(), value.to_string()))
    }
}
