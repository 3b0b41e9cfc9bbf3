use super::arc::EndpointArc;
use super::tokenize::{CommandKind, PathCommand};
use super::Segment;
use crate::errors::{Error, Result};
use crate::geometry::Point;

/// Which kind of curve the previous command drew, for the reflected
/// control point of a following `S` or `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CurveFamily {
    Cubic,
    Quadratic,
    #[default]
    Other,
}

/// Running state between path commands.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParseState {
    pub current_position: Point,
    /// Start of the current subpath; `Z` returns here.
    pub start_position: Point,
    pub last_command_family: CurveFamily,
    /// Final control point of the previous curve, if any.
    pub last_control_point: Point,
    /// The previous command was `Z`.
    pub closed: bool,
}

impl ParseState {
    /// Resolve a possibly-relative point against the current position
    fn resolve(&self, absolute: bool, x: f64, y: f64) -> Point {
        let p = Point::new(x, y);
        if absolute {
            p
        } else {
            self.current_position + p
        }
    }

    /// First control point of a smooth curve: the reflection of the previous
    /// curve's last control point if it was of the same family, otherwise
    /// the current position.
    fn reflected_control(&self, family: CurveFamily) -> Point {
        if self.last_command_family == family {
            self.last_control_point.reflect(self.current_position)
        } else {
            self.current_position
        }
    }

    fn line_to(self, end: Point, out: &mut Vec<Segment>) -> Self {
        out.push(Segment::LineTo(end));
        Self {
            current_position: end,
            last_command_family: CurveFamily::Other,
            ..self
        }
    }

    fn curve_to(self, family: CurveFamily, segment: Segment, out: &mut Vec<Segment>) -> Self {
        let (ctrl, end) = match segment {
            Segment::CubicCurveTo(_, c2, end) => (c2, end),
            Segment::QuadraticCurveTo(c, end) => (c, end),
            _ => (self.current_position, self.current_position),
        };
        out.push(segment);
        Self {
            current_position: end,
            last_command_family: family,
            last_control_point: ctrl,
            ..self
        }
    }
}

/// Apply a single command to `state`, appending any resulting segments to
/// `out` and returning the updated state.
pub fn step(state: ParseState, cmd: &PathCommand, out: &mut Vec<Segment>) -> Result<ParseState> {
    if state.closed && cmd.kind != CommandKind::MoveTo {
        return Err(Error::MisplacedCloseOrMove(cmd.letter()));
    }
    let abs = cmd.absolute;
    let mut state = ParseState {
        closed: false,
        ..state
    };

    for (idx, args) in cmd.arg_groups()?.enumerate() {
        state = match (cmd.kind, args) {
            (CommandKind::MoveTo, &[x, y]) => {
                let pos = state.resolve(abs, x, y);
                if idx == 0 {
                    out.push(Segment::MoveTo(pos));
                    ParseState {
                        current_position: pos,
                        start_position: pos,
                        last_command_family: CurveFamily::Other,
                        ..state
                    }
                } else {
                    // subsequent pairs are implicit lineto commands
                    state.line_to(pos, out)
                }
            }
            (CommandKind::LineTo, &[x, y]) => state.line_to(state.resolve(abs, x, y), out),
            (CommandKind::HorizontalLineTo, &[x]) => {
                let cur = state.current_position;
                let x = if abs { x } else { cur.x + x };
                state.line_to(Point::new(x, cur.y), out)
            }
            (CommandKind::VerticalLineTo, &[y]) => {
                let cur = state.current_position;
                let y = if abs { y } else { cur.y + y };
                state.line_to(Point::new(cur.x, y), out)
            }
            (CommandKind::CurveTo, &[x1, y1, x2, y2, x, y]) => {
                let seg = Segment::CubicCurveTo(
                    state.resolve(abs, x1, y1),
                    state.resolve(abs, x2, y2),
                    state.resolve(abs, x, y),
                );
                state.curve_to(CurveFamily::Cubic, seg, out)
            }
            (CommandKind::SmoothCurveTo, &[x2, y2, x, y]) => {
                let seg = Segment::CubicCurveTo(
                    state.reflected_control(CurveFamily::Cubic),
                    state.resolve(abs, x2, y2),
                    state.resolve(abs, x, y),
                );
                state.curve_to(CurveFamily::Cubic, seg, out)
            }
            (CommandKind::QuadraticCurveTo, &[x1, y1, x, y]) => {
                let seg =
                    Segment::QuadraticCurveTo(state.resolve(abs, x1, y1), state.resolve(abs, x, y));
                state.curve_to(CurveFamily::Quadratic, seg, out)
            }
            (CommandKind::SmoothQuadraticCurveTo, &[x, y]) => {
                let seg = Segment::QuadraticCurveTo(
                    state.reflected_control(CurveFamily::Quadratic),
                    state.resolve(abs, x, y),
                );
                state.curve_to(CurveFamily::Quadratic, seg, out)
            }
            (CommandKind::Arc, &[rx, ry, rotation, large_arc, sweep, x, y]) => {
                let end = state.resolve(abs, x, y);
                if rx == 0. || ry == 0. {
                    // "If rx = 0 or ry = 0, then treat this as a straight line segment"
                    state.line_to(end, out)
                } else {
                    let arc = EndpointArc {
                        start: state.current_position,
                        end,
                        rx,
                        ry,
                        rotation,
                        large_arc: large_arc != 0.,
                        sweep: sweep != 0.,
                    };
                    out.extend(arc.to_curves());
                    ParseState {
                        current_position: end,
                        last_command_family: CurveFamily::Other,
                        ..state
                    }
                }
            }
            // arg_groups() guarantees each group matches the command arity
            (kind, args) => {
                return Err(Error::InvalidArgumentCount(kind.letter(abs), args.len()));
            }
        };
    }

    if cmd.kind == CommandKind::ClosePath {
        out.push(Segment::ClosePath);
        state = ParseState {
            current_position: state.start_position,
            last_command_family: CurveFamily::Other,
            closed: true,
            ..state
        };
    }
    Ok(state)
}

/// Convert a sequence of commands into segments, returning them along with
/// the final pen position.
pub fn build(commands: &[PathCommand]) -> Result<(Vec<Segment>, Point)> {
    match commands.first() {
        None => return Err(Error::NoCommandFound),
        Some(first) if first.kind != CommandKind::MoveTo => {
            return Err(Error::PathMustStartWithMoveTo)
        }
        _ => {}
    }

    let mut segments = Vec::new();
    let mut state = ParseState::default();
    for cmd in commands {
        state = step(state, cmd, &mut segments)?;
    }
    log::trace!(
        "built {} segments from {} commands",
        segments.len(),
        commands.len()
    );
    Ok((segments, state.current_position))
}
