//! Display formatting for statements
//!
//! Renders the token sequence back to text that parses to the same tokens.
//! The outer parentheses added at parse time are left out.

use super::token::Token;
use super::Statement;
use std::fmt;

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = self.tokens();
        let inner = match tokens {
            [Token::OpenParen, inner @ .., Token::CloseParen] => inner,
            _ => tokens,
        };
        write_tokens(f, inner)
    }
}

fn write_tokens(f: &mut fmt::Formatter<'_>, tokens: &[Token]) -> fmt::Result {
    let mut prev: Option<&Token> = None;
    for token in tokens {
        if let Some(prev) = prev {
            if needs_space(prev, token) {
                f.write_str(" ")?;
            }
        }
        write!(f, "{}", token)?;
        prev = Some(token);
    }
    Ok(())
}

/// Binary connectives are padded; adjacent operands are kept apart
fn needs_space(prev: &Token, next: &Token) -> bool {
    match (prev, next) {
        (Token::Binary(_), _) | (_, Token::Binary(_)) => true,
        (Token::Var(_) | Token::CloseParen, Token::Var(_) | Token::OpenParen | Token::Not) => true,
        _ => false,
    }
}
