use std::fmt;
use std::io;

/// Failures surfaced by dataset loading and model persistence.
///
/// `Io` covers files that could not be opened, read, or written; the
/// wrapped `io::ErrorKind` tells a missing file apart from other I/O
/// trouble. `Parse` means the file opened fine but its contents are not
/// the expected format.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Parse { line: usize, message: String },
    Shape(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "io error: {err}"),
            Error::Parse { line, message } => write!(f, "line {line}: {message}"),
            Error::Shape(msg) => write!(f, "invalid shape: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
