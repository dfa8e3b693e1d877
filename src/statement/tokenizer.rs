//! Tokenizer for statement text
//!
//! Scans left to right, skipping ASCII spaces. Operators are `(`, `)`, `&`,
//! `|`, `!`, `->` and `<->`; every other maximal run of characters is a
//! candidate variable name. Invalid names do not stop the scan, so a single
//! call reports all of them.

use super::error::ParseStatementError;
use super::registry::VariableRegistry;
use super::token::Token;
use log::{debug, warn};
use std::iter::Peekable;
use std::str::CharIndices;
use std::sync::Arc;

/// Characters that can never appear inside a variable name
const NOT_IN_VAR_NAME: &[char] = &['(', ')', '&', '|', '!', '<', '-', ' '];

/// Split `input` into tokens and collect its variables
///
/// The returned tokens are *not* wrapped in the outer parentheses;
/// [`Statement::parse`](crate::Statement::parse) adds them.
///
/// # Errors
///
/// [`ParseStatementError::InvalidVariableName`] listing every invalid
/// candidate name found in the input.
pub fn tokenize(input: &str) -> Result<(Vec<Token>, VariableRegistry), ParseStatementError> {
    let mut tokens = Vec::new();
    let mut registry = VariableRegistry::new();
    let mut invalid: Vec<Arc<str>> = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            ' ' => {}
            '(' => tokens.push(Token::OpenParen),
            ')' => tokens.push(Token::CloseParen),
            '&' => tokens.push(Token::AND),
            '|' => tokens.push(Token::OR),
            '!' => tokens.push(Token::Not),
            '<' if input[start..].starts_with("<->") => {
                chars.next();
                chars.next();
                tokens.push(Token::IFF);
            }
            '-' if input[start..].starts_with("->") => {
                chars.next();
                tokens.push(Token::IF_THEN);
            }
            '<' | '-' => {
                // Cannot start an operator here and cannot be part of a name.
                warn!("Invalid variable name: {}", c);
                invalid.push(Arc::from(&input[start..start + c.len_utf8()]));
            }
            _ => {
                let end = scan_name(&mut chars, input.len());
                let name = &input[start..end];
                if is_valid_name(name) {
                    let name = registry.register(name);
                    tokens.push(Token::Var(name));
                } else {
                    warn!("Invalid variable name: {}", name);
                    invalid.push(Arc::from(name));
                }
            }
        }
    }

    if !invalid.is_empty() {
        return Err(ParseStatementError::InvalidVariableName {
            names: invalid,
            input: Arc::from(input),
        });
    }

    debug!(
        "Tokenized {:?} into {} tokens over {} variables",
        input,
        tokens.len(),
        registry.len()
    );
    Ok((tokens, registry))
}

/// Advance past the rest of a candidate name and return its end offset
fn scan_name(chars: &mut Peekable<CharIndices>, len: usize) -> usize {
    while let Some(&(offset, c)) = chars.peek() {
        if NOT_IN_VAR_NAME.contains(&c) {
            return offset;
        }
        chars.next();
    }
    len
}

/// A name starts with an ASCII letter and continues with ASCII letters,
/// digits or underscores.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
