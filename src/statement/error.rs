//! Error types for statement parsing and reduction

use std::fmt;
use std::io;
use std::sync::Arc;

/// Why a token sequence failed to reduce to a single value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// A `)` without a matching `(`, or a `(` that is never closed
    UnbalancedParentheses,
    /// A binary operator or `!` without an operand on the required side
    MissingOperand,
    /// A parenthesised group with nothing inside, e.g. `()`
    EmptyGroup,
    /// More than one value left after reduction, e.g. `a b`
    LeftoverOperands,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MalformedReason::UnbalancedParentheses => "unbalanced parentheses",
            MalformedReason::MissingOperand => "operator is missing an operand",
            MalformedReason::EmptyGroup => "empty parenthesised group",
            MalformedReason::LeftoverOperands => "operands left over after reduction",
        };
        f.write_str(text)
    }
}

impl std::error::Error for MalformedReason {}

/// Errors produced when building a [`Statement`](crate::Statement) from text
///
/// The two variants are distinct failure kinds: lexical (bad variable names)
/// and structural (the tokens do not form a well-formed statement).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStatementError {
    /// One or more candidate variable names are invalid
    InvalidVariableName {
        /// Every offending name, in input order
        names: Vec<Arc<str>>,
        /// The original input string
        input: Arc<str>,
    },
    /// The token sequence is structurally malformed
    Malformed {
        /// What went wrong during verification
        reason: MalformedReason,
        /// The original input string
        input: Arc<str>,
    },
}

impl ParseStatementError {
    /// The input that failed to parse
    pub fn input(&self) -> &str {
        match self {
            ParseStatementError::InvalidVariableName { input, .. }
            | ParseStatementError::Malformed { input, .. } => input.as_ref(),
        }
    }
}

impl fmt::Display for ParseStatementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStatementError::InvalidVariableName { names, input } => {
                write!(f, "Invalid variable name")?;
                if names.len() > 1 {
                    write!(f, "s")?;
                }
                let listed: Vec<&str> = names.iter().map(|n| n.as_ref()).collect();
                write!(f, ": {}. Input: {:?}", listed.join(", "), input)
            }
            ParseStatementError::Malformed { reason, input } => {
                write!(f, "Malformed statement: {}. Input: {:?}", reason, input)
            }
        }
    }
}

impl std::error::Error for ParseStatementError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseStatementError::Malformed { reason, .. } => Some(reason),
            ParseStatementError::InvalidVariableName { .. } => None,
        }
    }
}

impl From<ParseStatementError> for io::Error {
    fn from(err: ParseStatementError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
