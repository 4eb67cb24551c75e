//! Error types for path parsing and document access.

use std::fmt;

/// Errors that can occur while parsing a path or accessing a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The root of a document was not a string-keyed map.
    InvalidRoot { found: String },
    /// A key named by the path does not exist.
    NotFound { key: String },
    /// A sequence index (or cursor position) is past the end.
    OutOfRange { index: usize, len: usize },
    /// A node had a different shape than the path requires.
    TypeMismatch {
        expected: String,
        found: String,
        key: String,
    },
    /// The path text itself is malformed.
    Syntax { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRoot { found } => {
                write!(f, "document root must be a map, found {}", found)
            }
            Error::NotFound { key } => write!(f, "path not found: no key '{}'", key),
            Error::OutOfRange { index, len } => {
                write!(f, "index {} out of range (length {})", index, len)
            }
            Error::TypeMismatch {
                expected,
                found,
                key,
            } => write!(f, "expected {} at '{}', found {}", expected, key, found),
            Error::Syntax { message } => write!(f, "invalid path syntax: {}", message),
        }
    }
}

impl std::error::Error for Error {}
