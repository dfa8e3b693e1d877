//! Error types for the symbolic logic crate
//!
//! [`LogicError`] wraps every recoverable failure of the public API so callers
//! can use a single error type, while the per-module errors
//! ([`ParseStatementError`], [`MalformedReason`], [`TableError`]) stay
//! available for precise matching.

use crate::statement::{MalformedReason, ParseStatementError};
use crate::table::TableError;
use std::fmt;
use std::io;

/// The main error type of the crate
#[derive(Debug)]
pub enum LogicError {
    /// Building a statement from text failed
    ///
    /// Either a variable name is invalid or the statement is structurally
    /// malformed; see [`ParseStatementError`].
    Parse(ParseStatementError),

    /// Reducing an already built statement failed
    ///
    /// Only reachable for token sequences that bypassed verification.
    Malformed(MalformedReason),

    /// An argument of [`combine_dyn`](crate::combine_dyn) is neither text
    /// nor a statement
    TypeMismatch {
        /// 1-based position of the offending argument
        argument: usize,
    },

    /// A truth table could not be generated for the requested range
    Table(TableError),

    /// IO error wrapper
    ///
    /// Wraps standard IO errors that occur while writing tables.
    Io(io::Error),
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicError::Parse(e) => write!(f, "{}", e),
            LogicError::Malformed(reason) => write!(f, "Malformed statement: {}", reason),
            LogicError::TypeMismatch { argument } => write!(
                f,
                "Malformed inputs: argument {} of combine is neither a string nor a statement",
                argument
            ),
            LogicError::Table(e) => write!(f, "{}", e),
            LogicError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for LogicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogicError::Parse(e) => Some(e),
            LogicError::Malformed(e) => Some(e),
            LogicError::Table(e) => Some(e),
            LogicError::Io(e) => Some(e),
            LogicError::TypeMismatch { .. } => None,
        }
    }
}

impl From<ParseStatementError> for LogicError {
    fn from(err: ParseStatementError) -> Self {
        LogicError::Parse(err)
    }
}

impl From<MalformedReason> for LogicError {
    fn from(err: MalformedReason) -> Self {
        LogicError::Malformed(err)
    }
}

impl From<TableError> for LogicError {
    fn from(err: TableError) -> Self {
        LogicError::Table(err)
    }
}

impl From<io::Error> for LogicError {
    fn from(err: io::Error) -> Self {
        LogicError::Io(err)
    }
}

impl From<LogicError> for io::Error {
    fn from(err: LogicError) -> Self {
        match err {
            LogicError::Io(e) => e,
            LogicError::Table(e) => e.into(),
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
