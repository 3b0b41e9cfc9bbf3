//! ## svgmarker - turn SVG shapes into normalized plot markers
//!
//! `svgmarker` interprets SVG path data (and the basic SVG shapes, which are
//! first converted to path data) into a sequence of line and Bezier curve
//! segments, then centers and scales the result so that it fits a unit box
//! around the origin with the y-axis pointing up. This is the form expected
//! of custom marker glyphs by plotting libraries.
//!
//! ## Library use
//!
//! The `marker_from_*` functions run the whole pipeline on path data, an SVG
//! document string or an SVG file. The resulting `NormalizedPath` can be
//! inspected segment by segment, or rendered to text via `render()` as
//! configured by a `MarkerConfig`.
//!
//! ## Example
//!
//! ```
//! let marker = svgmarker::marker_from_path_data("M 0,0 L 10,0 L 10,10 L 0,10 Z").unwrap();
//! let cfg = svgmarker::MarkerConfig::default();
//!
//! let output = svgmarker::render(&marker, &cfg).unwrap();
//! assert_eq!(output, "M -0.5 0.5 L 0.5 0.5 L 0.5 -0.5 L -0.5 -0.5 Z");
//! ```

use std::io::{BufRead, Write};
use std::path::Path as FsPath;

#[cfg(feature = "cli")]
pub mod cli;
mod constants;
mod document;
pub mod errors;
pub mod geometry;
pub mod path;
pub mod shapes;

pub use constants::{DEFAULT_PRECISION, SUBPATH_SEPARATOR};
pub use document::SvgDocument;
pub use errors::{Error, Result};
pub use path::{normalize, parse_path, NormalizedPath, Path, Segment};

// Allow users of this as a library to easily retrieve the version of svgmarker being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Text format produced by `render()`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// SVG path data
    #[default]
    Path,
    /// A standalone SVG document previewing the marker
    Svg,
    /// JSON list of segments
    #[cfg(feature = "json")]
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "path" => Ok(Self::Path),
            "svg" => Ok(Self::Svg),
            #[cfg(feature = "json")]
            "json" => Ok(Self::Json),
            _ => Err(Error::Parse(format!("Unknown output format: {s}"))),
        }
    }
}

/// What an input stream contains
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputKind {
    /// An SVG document; every graphic element contributes to the marker
    #[default]
    Svg,
    /// Raw SVG path data
    PathData,
}

/// Settings controlling how a marker is rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerConfig {
    pub format: OutputFormat,
    /// Maximum decimal places in rendered numbers
    pub precision: usize,
    /// Replace quadratic Beziers with equivalent cubics
    pub cubic: bool,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: DEFAULT_PRECISION,
            cubic: false,
        }
    }
}

/// Parse path data and normalize the result.
pub fn marker_from_path_data(data: &str) -> Result<NormalizedPath> {
    Ok(normalize(&parse_path(data)?))
}

/// Build a marker from every graphic element of an SVG document.
pub fn marker_from_svg_str(svg: &str) -> Result<NormalizedPath> {
    SvgDocument::from_str(svg)?.marker()
}

/// Build a marker from every graphic element of an SVG file.
pub fn marker_from_file(path: impl AsRef<FsPath>) -> Result<NormalizedPath> {
    SvgDocument::from_file(path)?.marker()
}

/// Render a marker as text in the configured format.
pub fn render(marker: &NormalizedPath, config: &MarkerConfig) -> Result<String> {
    let cubic;
    let marker = if config.cubic {
        cubic = marker.to_cubic();
        &cubic
    } else {
        marker
    };
    match config.format {
        OutputFormat::Path => Ok(marker.to_path_data(config.precision)),
        OutputFormat::Svg => Ok(preview_svg(marker, config.precision)),
        #[cfg(feature = "json")]
        OutputFormat::Json => serde_json::to_string(marker).map_err(Error::from_err),
    }
}

/// Standalone SVG document drawing the marker. The unit box is flipped back
/// to SVG's y-down orientation.
fn preview_svg(marker: &NormalizedPath, precision: usize) -> String {
    format!(
        concat!(
            r#"<svg xmlns="{}" viewBox="-0.6 -0.6 1.2 1.2" width="100%" height="100%">"#,
            "\n",
            r#"<path d="{}" transform="scale(1,-1)" fill="none" stroke="black" stroke-width="0.01"/>"#,
            "\n</svg>"
        ),
        constants::SVG_NAMESPACE,
        marker.to_path_data(precision)
    )
}

/// Read an entire input stream, convert it to a marker and write it to
/// `writer` in the configured format, followed by a newline.
pub fn marker_stream(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    kind: InputKind,
    config: &MarkerConfig,
) -> Result<()> {
    let marker = match kind {
        InputKind::Svg => SvgDocument::from_reader(reader)?.marker()?,
        InputKind::PathData => {
            let mut data = String::new();
            reader.read_to_string(&mut data)?;
            marker_from_path_data(&data)?
        }
    };
    writeln!(writer, "{}", render(&marker, config)?)?;
    Ok(())
}

/// Return a 'minimal' representation of the given number
pub(crate) fn fstr(x: f64) -> String {
    fstr_prec(x, DEFAULT_PRECISION)
}

/// Return a 'minimal' representation of the given number with at most
/// `precision` decimal places
pub(crate) fn fstr_prec(x: f64, precision: usize) -> String {
    if x == x.trunc() && x.abs() < 1e15 {
        return (x as i64).to_string();
    }
    let result = format!("{x:.precision$}");
    let result = if result.contains('.') {
        result.trim_end_matches('0').trim_end_matches('.')
    } else {
        &result
    };
    if result == "-0" {
        "0".to_owned()
    } else {
        result.to_owned()
    }
}
