use std::fmt;

use super::syntax::{PathSyntax, SvgPathSyntax};
use crate::errors::{Error, Result};

/// The ten command kinds of the SVG path grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    SmoothCurveTo,
    QuadraticCurveTo,
    SmoothQuadraticCurveTo,
    Arc,
    ClosePath,
}

impl CommandKind {
    /// Command kind and absolute flag for a command letter.
    pub fn from_char(c: char) -> Option<(Self, bool)> {
        let kind = match c.to_ascii_uppercase() {
            'M' => Self::MoveTo,
            'L' => Self::LineTo,
            'H' => Self::HorizontalLineTo,
            'V' => Self::VerticalLineTo,
            'C' => Self::CurveTo,
            'S' => Self::SmoothCurveTo,
            'Q' => Self::QuadraticCurveTo,
            'T' => Self::SmoothQuadraticCurveTo,
            'A' => Self::Arc,
            'Z' => Self::ClosePath,
            _ => return None,
        };
        Some((kind, c.is_ascii_uppercase()))
    }

    pub fn letter(&self, absolute: bool) -> char {
        let c = match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::HorizontalLineTo => 'H',
            Self::VerticalLineTo => 'V',
            Self::CurveTo => 'C',
            Self::SmoothCurveTo => 'S',
            Self::QuadraticCurveTo => 'Q',
            Self::SmoothQuadraticCurveTo => 'T',
            Self::Arc => 'A',
            Self::ClosePath => 'Z',
        };
        if absolute {
            c
        } else {
            c.to_ascii_lowercase()
        }
    }

    /// Number of arguments consumed by a single repetition of the command;
    /// zero only for closepath.
    pub fn arity(&self) -> usize {
        match self {
            Self::ClosePath => 0,
            Self::HorizontalLineTo | Self::VerticalLineTo => 1,
            Self::MoveTo | Self::LineTo | Self::SmoothQuadraticCurveTo => 2,
            Self::SmoothCurveTo | Self::QuadraticCurveTo => 4,
            Self::CurveTo => 6,
            Self::Arc => 7,
        }
    }
}

/// One command letter together with every number following it up to the
/// next command letter. Implicitly repeated commands share a single
/// `PathCommand` with a multiple of the command's arity as arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    pub kind: CommandKind,
    pub absolute: bool,
    pub args: Vec<f64>,
}

impl PathCommand {
    pub fn new(kind: CommandKind, absolute: bool, args: Vec<f64>) -> Self {
        Self {
            kind,
            absolute,
            args,
        }
    }

    pub fn letter(&self) -> char {
        self.kind.letter(self.absolute)
    }

    /// Argument groups, one per repetition of the command.
    ///
    /// Fails unless the argument count is a non-zero multiple of the arity
    /// (or exactly zero for closepath).
    pub fn arg_groups(&self) -> Result<std::slice::ChunksExact<'_, f64>> {
        let arity = self.kind.arity();
        let count = self.args.len();
        let valid = if arity == 0 {
            count == 0
        } else {
            count >= arity && count % arity == 0
        };
        if !valid {
            return Err(Error::InvalidArgumentCount(self.letter(), count));
        }
        // chunks_exact panics on zero; closepath has no groups anyway
        Ok(self.args.chunks_exact(arity.max(1)))
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())?;
        for arg in &self.args {
            write!(f, " {}", crate::fstr(*arg))?;
        }
        Ok(())
    }
}

/// Split path data into commands and their numeric arguments.
pub fn tokenize(data: &str) -> Result<Vec<PathCommand>> {
    let mut tokens = SvgPathSyntax::new(data);
    if !tokens.has_command() {
        return Err(Error::NoCommandFound);
    }

    let mut commands: Vec<PathCommand> = Vec::new();
    tokens.skip_wsp_comma();
    while !tokens.at_end() {
        if tokens.at_command() {
            let letter = tokens.read_command()?;
            let (kind, absolute) =
                CommandKind::from_char(letter).ok_or(Error::UnknownCommand(letter))?;
            if commands.is_empty() && kind != CommandKind::MoveTo {
                return Err(Error::PathMustStartWithMoveTo);
            }
            commands.push(PathCommand::new(kind, absolute, Vec::new()));
        } else if tokens.at_number() {
            let Some(cmd) = commands.last_mut() else {
                // numbers before any command letter
                return Err(Error::PathMustStartWithMoveTo);
            };
            // "The command letter can be eliminated on subsequent commands if the same
            // command is used multiple times in a row", so numbers simply accumulate
            // on the current command.
            let is_flag_position =
                cmd.kind == CommandKind::Arc && matches!(cmd.args.len() % 7, 3 | 4);
            let value = if is_flag_position && tokens.at_flag() {
                if tokens.read_flag()? {
                    1.
                } else {
                    0.
                }
            } else {
                tokens.read_number()?
            };
            cmd.args.push(value);
        } else {
            let c = tokens.current().unwrap_or_default();
            return Err(Error::UnknownCommand(c));
        }
        tokens.skip_wsp_comma();
    }
    log::trace!("tokenized {} path commands", commands.len());
    Ok(commands)
}
