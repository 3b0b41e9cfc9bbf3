//! Constants used throughout svgmarker

/// Every command letter of the SVG path grammar
pub const PATH_COMMANDS: &str = "MmLlHhVvCcSsQqTtAaZz";

/// Injected between the path data of separate elements when combining them
/// into a single path, e.g. `M 0 0 h 10 M 0,0 M 5 5 v 10`
pub const SUBPATH_SEPARATOR: &str = "M 0,0 ";

/// Largest angular span (degrees) of a single Bezier approximating an arc
pub const MAX_ARC_SEGMENT_DEG: f64 = 90.;

/// Namespace used for generated SVG documents
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Decimal places used when rendering path data unless configured otherwise
pub const DEFAULT_PRECISION: usize = 3;
