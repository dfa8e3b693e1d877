//! Combining two statements with OR

use super::error::ParseStatementError;
use super::token::Token;
use super::Statement;
use crate::error::LogicError;
use log::debug;
use std::any::Any;

/// One side of a [`combine`] call: raw text or an already-built statement
#[derive(Debug, Clone, Copy)]
pub enum CombineInput<'a> {
    Text(&'a str),
    Statement(&'a Statement),
}

impl<'a> From<&'a str> for CombineInput<'a> {
    fn from(text: &'a str) -> Self {
        CombineInput::Text(text)
    }
}

impl<'a> From<&'a String> for CombineInput<'a> {
    fn from(text: &'a String) -> Self {
        CombineInput::Text(text)
    }
}

impl<'a> From<&'a Statement> for CombineInput<'a> {
    fn from(statement: &'a Statement) -> Self {
        CombineInput::Statement(statement)
    }
}

/// Build the statement `a OR b`
///
/// - Two texts are joined as `(a)|(b)` and parsed.
/// - A text next to a statement is parsed on its own first.
/// - Two statements are spliced as `( a | b )` without re-verification. Each
///   side keeps its own outer parentheses so the OR applies to the whole of
///   both. The variable order of the result is the sorted union of both.
///
/// # Errors
///
/// Any [`ParseStatementError`] from parsing a text side.
///
/// # Examples
///
/// ```
/// use symbolic_logic::{combine, Statement};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let s = Statement::parse("a&b")?;
/// let f = combine(&s, "c&d")?;
/// assert_eq!(f.to_string(), "(a & b) | (c & d)");
/// # Ok(())
/// # }
/// ```
pub fn combine<'a, 'b>(
    a: impl Into<CombineInput<'a>>,
    b: impl Into<CombineInput<'b>>,
) -> Result<Statement, ParseStatementError> {
    match (a.into(), b.into()) {
        (CombineInput::Text(a), CombineInput::Text(b)) => {
            Statement::parse(&format!("({})|({})", a, b))
        }
        (CombineInput::Statement(a), CombineInput::Statement(b)) => Ok(combine_statements(a, b)),
        (CombineInput::Statement(a), CombineInput::Text(b)) => {
            Ok(combine_statements(a, &Statement::parse(b)?))
        }
        (CombineInput::Text(a), CombineInput::Statement(b)) => {
            Ok(combine_statements(&Statement::parse(a)?, b))
        }
    }
}

/// Dynamically-typed [`combine`]
///
/// Accepts `String`, `&'static str` or [`Statement`] values behind `dyn Any`,
/// for callers that only know the argument types at run time.
///
/// # Errors
///
/// - [`LogicError::TypeMismatch`] if an argument is none of the accepted types
/// - [`LogicError::Parse`] if a text argument fails to parse
pub fn combine_dyn(a: &dyn Any, b: &dyn Any) -> Result<Statement, LogicError> {
    let a = downcast_input(a, 1)?;
    let b = downcast_input(b, 2)?;
    Ok(combine(a, b)?)
}

fn downcast_input(value: &dyn Any, argument: usize) -> Result<CombineInput<'_>, LogicError> {
    if let Some(statement) = value.downcast_ref::<Statement>() {
        Ok(CombineInput::Statement(statement))
    } else if let Some(text) = value.downcast_ref::<String>() {
        Ok(CombineInput::Text(text))
    } else if let Some(text) = value.downcast_ref::<&'static str>() {
        Ok(CombineInput::Text(text))
    } else {
        Err(LogicError::TypeMismatch { argument })
    }
}

/// Splice two verified statements into `( a | b )`
pub(crate) fn combine_statements(a: &Statement, b: &Statement) -> Statement {
    let mut tokens = Vec::with_capacity(a.tokens().len() + b.tokens().len() + 3);
    tokens.push(Token::OpenParen);
    tokens.extend_from_slice(a.tokens());
    tokens.push(Token::OR);
    tokens.extend_from_slice(b.tokens());
    tokens.push(Token::CloseParen);

    let registry = a.registry().merged(b.registry());
    debug!(
        "Combined statements into {} tokens over {} variables",
        tokens.len(),
        registry.len()
    );
    Statement::from_parts(tokens, registry)
}
