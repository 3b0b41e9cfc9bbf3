//! Extraction of graphic elements from an SVG document.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path as FsPath;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::constants::{SUBPATH_SEPARATOR, SVG_NAMESPACE};
use crate::errors::{Error, Result};
use crate::path::{normalize, parse_path, NormalizedPath};
use crate::shapes::{AttrMap, GraphicElement, Shape};

/// Name and attributes of an XML start (or empty) tag.
struct RawElement(String, AttrMap);

impl TryFrom<&BytesStart<'_>> for RawElement {
    type Error = Error;

    fn try_from(e: &BytesStart) -> Result<Self> {
        let name = String::from_utf8(e.name().into_inner().to_vec())?;
        let mut attrs = AttrMap::new();
        for a in e.attributes() {
            let aa = a.map_err(|e| Error::Document(format!("bad attribute: {e}")))?;
            let key = String::from_utf8(aa.key.into_inner().to_vec())?;
            let value = aa
                .unescape_value()
                .map_err(|e| Error::Document(format!("bad attribute value: {e}")))?
                .into_owned();
            attrs.insert(key, value);
        }
        Ok(Self(name, attrs))
    }
}

/// The graphic elements of the first `<svg>` element in a document, in
/// document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SvgDocument {
    elements: Vec<Shape>,
}

impl SvgDocument {
    pub fn new(elements: Vec<Shape>) -> Self {
        Self { elements }
    }

    pub fn from_reader(reader: &mut dyn BufRead) -> Result<Self> {
        let mut reader = Reader::from_reader(reader);
        let mut buf = Vec::new();
        let mut elements = Vec::new();

        // Element depth within the first svg element; None until it is found,
        // and again once it has been closed.
        let mut depth: Option<usize> = None;
        let mut svg_found = false;
        loop {
            let pos = reader.buffer_position();
            let ev = reader
                .read_event_into(&mut buf)
                .map_err(|e| Error::Document(format!("XML error near position {pos}: {e}")))?;
            match ev {
                Event::Eof => break,
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let is_start = matches!(ev, Event::Start(_));
                    let RawElement(name, attrs) = RawElement::try_from(e)?;
                    match depth {
                        None if !svg_found && name == "svg" => {
                            svg_found = true;
                            if is_start {
                                depth = Some(0);
                            }
                        }
                        Some(d) => {
                            if let Some(shape) = Shape::from_element(&name, &attrs)? {
                                elements.push(shape);
                            }
                            if is_start {
                                depth = Some(d + 1);
                            }
                        }
                        None => {}
                    }
                }
                Event::End(_) => {
                    depth = match depth {
                        Some(0) | None => None,
                        Some(d) => Some(d - 1),
                    };
                }
                _ => {}
            }
            buf.clear();
        }

        if !svg_found {
            return Err(Error::Document("svg element not found".to_owned()));
        }
        log::debug!("found {} graphic elements", elements.len());
        Ok(Self { elements })
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(&mut Cursor::new(s.as_bytes()))
    }

    pub fn from_file(path: impl AsRef<FsPath>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(&mut BufReader::new(file))
    }

    pub fn elements(&self) -> &[Shape] {
        &self.elements
    }

    /// Path data of every element, joined into a single path.
    pub fn path_data(&self) -> String {
        self.elements
            .iter()
            .map(|el| el.path_repr())
            .collect::<Vec<_>>()
            .join(&format!(" {SUBPATH_SEPARATOR}"))
    }

    /// Run the combined path data through the full marker pipeline.
    pub fn marker(&self) -> Result<NormalizedPath> {
        Ok(normalize(&parse_path(&self.path_data())?))
    }
}

impl std::str::FromStr for SvgDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SvgDocument::from_str(s)
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="{SVG_NAMESPACE}" height="100%" width="100%">"#
        )?;
        for el in &self.elements {
            writeln!(f, "{}", el.svg_repr())?;
        }
        write!(f, "</svg>")
    }
}
