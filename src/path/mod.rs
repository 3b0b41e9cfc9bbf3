//! SVG path data interpretation.
//!
//! Path data goes through three stages: `tokenize` splits it into commands
//! with their numeric arguments, `build` turns those into absolute
//! [`Segment`]s (arcs becoming cubic Beziers along the way), and `normalize`
//! maps the result into a unit box centered on the origin.

mod arc;
mod builder;
mod normalize;
mod segment;
mod syntax;
mod tokenize;

pub use arc::{CenterArc, EndpointArc};
pub use builder::{build, step, CurveFamily, ParseState};
pub use normalize::{normalize, normalize_scale, NormalizedPath};
pub use segment::{Path, Segment};
pub(crate) use syntax::{PathSyntax, SvgPathSyntax};
pub use tokenize::{tokenize, CommandKind, PathCommand};

use crate::errors::Result;

/// Parse path data into a `Path` of absolute segments.
pub fn parse_path(data: &str) -> Result<Path> {
    let commands = tokenize(data)?;
    let (segments, _) = build(&commands)?;
    Ok(Path::new(segments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::geometry::Point;

    #[test]
    fn test_parse_path() {
        let path = parse_path("M 0,0 L 10,0 L 10,10 L 0,10 Z").unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.segments()[0], Segment::MoveTo(Point::ORIGIN));
        assert_eq!(path.to_string(), "M 0 0 L 10 0 L 10 10 L 0 10 Z");
    }

    #[test]
    fn test_parse_path_separator() {
        // joined shape paths are just further moveto commands
        let path = parse_path("M 1,1 L 2,2 M 0,0 M 5,5 L 6,6").unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.segments()[2], Segment::MoveTo(Point::ORIGIN));
    }

    #[test]
    fn test_parse_path_errors() {
        assert!(matches!(parse_path("foo 1 2"), Err(Error::NoCommandFound)));
        assert!(matches!(parse_path("Q 1 2 3 4"), Err(Error::PathMustStartWithMoveTo)));
        assert!(matches!(
            parse_path("M 1 2 Z Q 1 2 3 4"),
            Err(Error::MisplacedCloseOrMove('Q'))
        ));
    }
}
