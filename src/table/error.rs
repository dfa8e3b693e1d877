//! Error types for truth table generation

use std::fmt;
use std::io;

/// Errors raised when a requested table cannot be generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The assignment index space `2^count` does not fit in a `u64`
    TooManyVariables {
        /// Number of distinct variables in the statement
        count: usize,
        /// Largest supported number of variables
        max: usize,
    },
    /// The requested `[start, end)` range is not inside `[0, rows)`
    RangeOutOfBounds {
        start: u64,
        end: u64,
        /// Number of rows of the full table
        rows: u64,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::TooManyVariables { count, max } => write!(
                f,
                "Statement has {} variables; truth tables support at most {}",
                count, max
            ),
            TableError::RangeOutOfBounds { start, end, rows } => write!(
                f,
                "Row range [{}, {}) is outside the table of {} rows",
                start, end, rows
            ),
        }
    }
}

impl std::error::Error for TableError {}

impl From<TableError> for io::Error {
    fn from(err: TableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
