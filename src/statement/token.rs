//! Lexical tokens of a logic statement

use std::fmt;
use std::sync::Arc;

/// A binary connective
///
/// All four connectives share a single precedence level and associate
/// left to right; only parentheses change grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `&`
    And,
    /// `|`
    Or,
    /// `->`
    IfThen,
    /// `<->`
    Iff,
}

impl BinaryOp {
    /// Apply the connective to two operand values
    ///
    /// # Examples
    ///
    /// ```
    /// use symbolic_logic::BinaryOp;
    ///
    /// assert!(BinaryOp::IfThen.apply(false, false));
    /// assert!(!BinaryOp::IfThen.apply(true, false));
    /// assert!(BinaryOp::Iff.apply(false, false));
    /// ```
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            BinaryOp::And => lhs && rhs,
            BinaryOp::Or => lhs || rhs,
            BinaryOp::IfThen => !lhs || rhs,
            BinaryOp::Iff => lhs == rhs,
        }
    }

    /// The source text of the connective
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::IfThen => "->",
            BinaryOp::Iff => "<->",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single token of a statement
///
/// Tokens are immutable once produced. Variable names are shared `Arc<str>`
/// so cloning a token sequence never copies the names themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    OpenParen,
    CloseParen,
    Not,
    Binary(BinaryOp),
    Var(Arc<str>),
}

impl Token {
    pub const AND: Token = Token::Binary(BinaryOp::And);
    pub const OR: Token = Token::Binary(BinaryOp::Or);
    pub const IF_THEN: Token = Token::Binary(BinaryOp::IfThen);
    pub const IFF: Token = Token::Binary(BinaryOp::Iff);

    /// Create a variable token
    pub fn var(name: &str) -> Self {
        Token::Var(Arc::from(name))
    }

    /// The variable name, if this is a variable token
    pub fn as_var(&self) -> Option<&Arc<str>> {
        match self {
            Token::Var(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenParen => f.write_str("("),
            Token::CloseParen => f.write_str(")"),
            Token::Not => f.write_str("!"),
            Token::Binary(op) => write!(f, "{}", op),
            Token::Var(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_truth_tables() {
        let rows = [(false, false), (false, true), (true, false), (true, true)];
        let expected = [
            (BinaryOp::And, [false, false, false, true]),
            (BinaryOp::Or, [false, true, true, true]),
            (BinaryOp::IfThen, [true, true, false, true]),
            (BinaryOp::Iff, [true, false, false, true]),
        ];
        for (op, outputs) in expected {
            for ((lhs, rhs), want) in rows.iter().zip(outputs) {
                assert_eq!(op.apply(*lhs, *rhs), want, "{} {} {}", lhs, op, rhs);
            }
        }
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::IFF.to_string(), "<->");
        assert_eq!(Token::IF_THEN.to_string(), "->");
        assert_eq!(Token::var("x_1").to_string(), "x_1");
        assert_eq!(Token::var("x_1").as_var().map(|n| n.as_ref()), Some("x_1"));
        assert_eq!(Token::Not.as_var(), None);
    }
}
