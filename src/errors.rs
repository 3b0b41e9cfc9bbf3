use std::error::Error as StdError;
use std::fmt;
use std::num::ParseFloatError;
use std::string::FromUtf8Error;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Path data contains no command letter at all
    NoCommandFound,
    /// The first command of path data is not a moveto
    PathMustStartWithMoveTo,
    /// A character which is neither a path command nor part of a number
    UnknownCommand(char),
    /// Command letter and number of arguments supplied to it
    InvalidArgumentCount(char, usize),
    /// Command letter found directly after a closepath
    MisplacedCloseOrMove(char),
    /// Malformed numeric or other low-level syntax
    Parse(String),
    /// Attribute name and the offending value
    InvalidValue(String, String),
    MissingAttribute(String),
    Document(String),
    Cli(String),
    Io(std::io::Error),
    Other(Box<dyn StdError + Send + Sync>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoCommandFound => write!(f, "No command found in path data"),
            Error::PathMustStartWithMoveTo => {
                write!(f, "Path data must start with a moveto (M/m) command")
            }
            Error::UnknownCommand(c) => write!(f, "Unknown path command '{c}'"),
            Error::InvalidArgumentCount(cmd, count) => {
                write!(f, "Invalid argument count {count} for path command '{cmd}'")
            }
            Error::MisplacedCloseOrMove(cmd) => {
                write!(f, "Path command '{cmd}' follows closepath; expected moveto")
            }
            Error::Parse(reason) => write!(f, "Parse error: {reason}"),
            Error::InvalidValue(attr, value) => {
                write!(f, "Invalid value for '{attr}': '{value}'")
            }
            Error::MissingAttribute(attr) => write!(f, "Element missing attribute '{attr}'"),
            Error::Document(reason) => write!(f, "Document error: {reason}"),
            Error::Cli(reason) => write!(f, "{reason}"),
            Error::Io(source) => write!(f, "IO error: {source}"),
            Error::Other(source) => write!(f, "{source}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(source) => Some(source),
            Error::Other(source) => Some(&**source),
            _ => None,
        }
    }
}

impl Error {
    pub fn from_err<T>(err: T) -> Error
    where
        T: StdError + Send + Sync + 'static,
    {
        Error::Other(Box::new(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Error {
        Error::Parse(format!("float: {err}"))
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Error {
        Error::Parse(format!("utf8: {err}"))
    }
}
