//! Parsed logic statements
//!
//! A [`Statement`] bundles the token sequence of an expression with the
//! registry of its variables. It is parsed and verified once, then evaluated
//! as many times as needed.
//!
//! # Syntax
//!
//! | Text  | Meaning            |
//! |-------|--------------------|
//! | `!`   | not                |
//! | `&`   | and                |
//! | `\|`  | or                 |
//! | `->`  | if ... then        |
//! | `<->` | if and only if     |
//! | `( )` | grouping           |
//!
//! Variable names start with an ASCII letter and continue with ASCII letters,
//! digits or underscores.
//!
//! The binary connectives have **no relative precedence**: they are folded
//! strictly left to right within each parenthesised group.
//!
//! ```
//! use symbolic_logic::Statement;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let s = Statement::parse("a | b & c")?;
//!
//! let mut assignment = HashMap::new();
//! assignment.insert(Arc::from("a"), true);
//! // (a | b) & c, not a | (b & c)
//! assert_eq!(s.evaluate(&assignment)?, false);
//! # Ok(())
//! # }
//! ```

mod combine;
mod display;
pub mod error;
mod eval;
mod registry;
mod token;
mod tokenizer;

pub use combine::{combine, combine_dyn, CombineInput};
pub use error::{MalformedReason, ParseStatementError};
pub use eval::evaluate;
pub use registry::VariableRegistry;
pub use token::{BinaryOp, Token};
pub use tokenizer::{is_valid_name, tokenize};

use log::debug;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

/// A parsed and verified logic statement
///
/// The token sequence always starts with `(` and ends with the matching `)`.
/// Every variable token has an entry in the registry and every registry
/// entry occurs as a token. Statements are immutable; evaluation works on a
/// private copy of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    tokens: Arc<[Token]>,
    registry: VariableRegistry,
}

impl Statement {
    /// Parse and verify a statement
    ///
    /// After tokenizing, the statement is evaluated once with every variable
    /// `false` to check that it is well formed. The value of that pass is
    /// discarded.
    ///
    /// # Errors
    ///
    /// - [`ParseStatementError::InvalidVariableName`] if any variable name is
    ///   invalid (all of them are reported)
    /// - [`ParseStatementError::Malformed`] if the parentheses are unbalanced,
    ///   an operator lacks an operand or operands are left over
    ///
    /// # Examples
    ///
    /// ```
    /// use symbolic_logic::{ParseStatementError, Statement};
    ///
    /// let s = Statement::parse("a&b|!(c|a)").unwrap();
    /// assert_eq!(s.num_variables(), 3);
    ///
    /// assert!(matches!(
    ///     Statement::parse("a&&b"),
    ///     Err(ParseStatementError::Malformed { .. })
    /// ));
    /// assert!(matches!(
    ///     Statement::parse("3fe & @q"),
    ///     Err(ParseStatementError::InvalidVariableName { .. })
    /// ));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseStatementError> {
        let (inner, registry) = tokenize(input)?;

        let mut tokens = Vec::with_capacity(inner.len() + 2);
        tokens.push(Token::OpenParen);
        tokens.extend(inner);
        tokens.push(Token::CloseParen);

        if let Err(reason) = evaluate(&tokens, &registry) {
            debug!("Rejected {:?}: {}", input, reason);
            return Err(ParseStatementError::Malformed {
                reason,
                input: Arc::from(input),
            });
        }

        debug!(
            "Parsed statement {:?} with variables {:?}",
            input,
            registry.names()
        );
        Ok(Statement {
            tokens: tokens.into(),
            registry,
        })
    }

    /// Assemble a statement from already-verified parts without re-checking
    pub(crate) fn from_parts(tokens: Vec<Token>, registry: VariableRegistry) -> Self {
        Statement {
            tokens: tokens.into(),
            registry,
        }
    }

    /// The full token sequence, including the outer parentheses
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The variable registry holding default values
    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    /// Variable names in declared order
    ///
    /// For parsed statements this is first-occurrence order; for combined
    /// statements it is sorted.
    pub fn variables(&self) -> &[Arc<str>] {
        self.registry.names()
    }

    /// Number of distinct variables
    pub fn num_variables(&self) -> usize {
        self.registry.len()
    }

    /// Evaluate the statement under an assignment
    ///
    /// Variables missing from `assignment` keep their registry value
    /// (`false` unless set otherwise); names that are not variables of this
    /// statement are ignored.
    ///
    /// # Errors
    ///
    /// [`MalformedReason`] if the token sequence cannot be reduced. This
    /// cannot happen for statements produced by [`Statement::parse`].
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> Result<bool, MalformedReason> {
        let mut registry = self.registry.clone();
        for (name, value) in assignment {
            registry.set(name, *value);
        }
        evaluate(&self.tokens, &registry)
    }

    /// Evaluate against an explicit registry, e.g. one owned by a table worker
    pub(crate) fn evaluate_in(&self, registry: &VariableRegistry) -> Result<bool, MalformedReason> {
        evaluate(&self.tokens, registry)
    }

    /// Combine with another statement using OR
    ///
    /// Shorthand for [`combine`]`(self, other)`.
    pub fn or(&self, other: &Statement) -> Statement {
        combine::combine_statements(self, other)
    }
}

impl FromStr for Statement {
    type Err = ParseStatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Statement::parse(s)
    }
}

impl TryFrom<&str> for Statement {
    type Error = ParseStatementError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Statement::parse(value)
    }
}
