//! Error types for loading, transforming and writing matrices.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse error category, one per failure family a caller may react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A file could not be opened, read or written.
    Io,
    /// Block size does not fit the matrix dimensions.
    InvalidParameter,
    /// The input text is not a well-formed matrix.
    Parse,
}

/// Which side of the transform an I/O failure happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoTarget {
    Input,
    Output,
}

impl fmt::Display for IoTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoTarget::Input => write!(f, "input"),
            IoTarget::Output => write!(f, "output"),
        }
    }
}

/// Location of a malformed token in the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePosition {
    /// One of the two leading dimension tokens.
    Header(&'static str),
    /// A matrix entry, zero-based.
    Value { row: usize, col: usize },
}

impl fmt::Display for ParsePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePosition::Header(field) => write!(f, "header field `{}`", field),
            ParsePosition::Value { row, col } => write!(f, "row {}, column {}", row, col),
        }
    }
}

/// A token that could not be turned into a dimension or a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {position}")]
pub struct ParseError {
    pub position: ParsePosition,
    pub message: String,
}

impl ParseError {
    pub fn new(position: ParsePosition, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

/// Errors produced by the circulant transform.
#[derive(Debug, Error)]
pub enum Error {
    /// Opening, reading or writing a file failed.
    #[error("cannot open {target} {}: {source}", .path.display())]
    Io {
        target: IoTarget,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `k` is zero or does not evenly divide the matrix dimensions.
    #[error("k = {k} does not evenly divide matrix dimensions {rows}x{cols}")]
    InvalidParameter { k: usize, rows: usize, cols: usize },

    /// Malformed input text.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A NaN or infinite input value under the reject policy.
    #[error("non-finite value {value} at row {row}, column {col}")]
    NonFinite { row: usize, col: usize, value: f64 },
}

impl Error {
    pub(crate) fn io(target: IoTarget, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            target,
            path: path.into(),
            source,
        }
    }

    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io { .. } => ErrorKind::Io,
            Error::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Error::Parse(_) | Error::NonFinite { .. } => ErrorKind::Parse,
        }
    }
}
