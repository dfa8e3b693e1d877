//! Left-to-right evaluation of token sequences
//!
//! Evaluation is a single pass over the tokens with an explicit stack. Every
//! `)` collapses the tokens back to its matching `(` into one value. Inside a
//! group there is no operator precedence: negations are applied first, then
//! binary connectives are folded strictly from the left, so `a & b | c` is
//! `(a & b) | c` and `a | b & c` is `(a | b) & c`.

use super::error::MalformedReason;
use super::registry::VariableRegistry;
use super::token::{BinaryOp, Token};
use log::trace;

/// An element of the evaluation stack: an unreduced token or a reduced value
#[derive(Debug, Clone, Copy)]
enum Item<'a> {
    Token(&'a Token),
    Value(bool),
}

/// A parenthesis-free element after variable lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Term {
    Value(bool),
    Not,
    Binary(BinaryOp),
}

/// Evaluate a token sequence against the values in `registry`
///
/// The sequence must be one parenthesised group overall, as produced by
/// [`Statement::parse`](crate::Statement::parse).
///
/// # Errors
///
/// A [`MalformedReason`] when parentheses are unbalanced, an operator lacks an
/// operand, a group is empty or more than one value remains.
///
/// # Panics
///
/// If a variable token names a variable that is not in `registry`. Statements
/// built through the public constructors always register every variable.
pub fn evaluate(tokens: &[Token], registry: &VariableRegistry) -> Result<bool, MalformedReason> {
    let mut stack: Vec<Item<'_>> = Vec::with_capacity(tokens.len());

    for token in tokens {
        if *token != Token::CloseParen {
            stack.push(Item::Token(token));
            continue;
        }

        let mut group = Vec::new();
        loop {
            match stack.pop() {
                Some(Item::Token(Token::OpenParen)) => break,
                Some(item) => group.push(item),
                None => return Err(MalformedReason::UnbalancedParentheses),
            }
        }
        // Popped in reverse.
        group.reverse();
        let value = reduce(&group, registry)?;
        stack.push(Item::Value(value));
    }

    match stack.as_slice() {
        [Item::Value(value)] => Ok(*value),
        [] => Err(MalformedReason::EmptyGroup),
        items if items.iter().any(|i| matches!(i, Item::Token(Token::OpenParen))) => {
            Err(MalformedReason::UnbalancedParentheses)
        }
        _ => Err(MalformedReason::LeftoverOperands),
    }
}

/// Reduce a parenthesis-free run of items to a single value
fn reduce(group: &[Item<'_>], registry: &VariableRegistry) -> Result<bool, MalformedReason> {
    if group.is_empty() {
        return Err(MalformedReason::EmptyGroup);
    }

    let mut terms: Vec<Term> = group.iter().map(|item| resolve(*item, registry)).collect();
    reduce_negations(&mut terms)?;
    reduce_binaries(&mut terms)?;

    match terms.as_slice() {
        [Term::Value(value)] => Ok(*value),
        _ => Err(MalformedReason::LeftoverOperands),
    }
}

/// Look up variables and turn an item into a term
fn resolve(item: Item<'_>, registry: &VariableRegistry) -> Term {
    match item {
        Item::Value(value) => Term::Value(value),
        Item::Token(Token::Not) => Term::Not,
        Item::Token(Token::Binary(op)) => Term::Binary(*op),
        Item::Token(Token::Var(name)) => match registry.get(name) {
            Some(value) => Term::Value(value),
            None => panic!("variable {:?} is not registered with its statement", name),
        },
        Item::Token(Token::OpenParen | Token::CloseParen) => {
            unreachable!("parentheses never survive into a reduced group")
        }
    }
}

/// Replace every `!` and its operand with the negated value, left to right
///
/// A run of `!` collapses by parity onto the operand that follows it.
fn reduce_negations(terms: &mut Vec<Term>) -> Result<(), MalformedReason> {
    let mut i = 0;
    while i < terms.len() {
        if terms[i] == Term::Not {
            let run = terms[i..].iter().take_while(|t| **t == Term::Not).count();
            let value = match terms.get(i + run) {
                Some(Term::Value(value)) => *value,
                _ => return Err(MalformedReason::MissingOperand),
            };
            let negated = if run % 2 == 1 { !value } else { value };
            trace!("reduced {} negation(s) of {} to {}", run, value, negated);
            terms[i] = Term::Value(negated);
            terms.drain(i + 1..=i + run);
        }
        i += 1;
    }
    Ok(())
}

/// Fold binary connectives from the left, rescanning after every fold
fn reduce_binaries(terms: &mut Vec<Term>) -> Result<(), MalformedReason> {
    while let Some((pos, op)) = first_binary(terms) {
        let lhs = match pos.checked_sub(1).map(|p| terms[p]) {
            Some(Term::Value(value)) => value,
            _ => return Err(MalformedReason::MissingOperand),
        };
        let rhs = match terms.get(pos + 1) {
            Some(Term::Value(value)) => *value,
            _ => return Err(MalformedReason::MissingOperand),
        };
        let result = op.apply(lhs, rhs);
        trace!("reduced {} {} {} to {}", lhs, op, rhs, result);
        terms[pos - 1] = Term::Value(result);
        terms.drain(pos..=pos + 1);
    }
    Ok(())
}

fn first_binary(terms: &[Term]) -> Option<(usize, BinaryOp)> {
    terms.iter().enumerate().find_map(|(pos, term)| match term {
        Term::Binary(op) => Some((pos, *op)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::tokenizer::tokenize;

    /// Tokenize, wrap, assign and evaluate
    fn eval_with(input: &str, values: &[(&str, bool)]) -> Result<bool, MalformedReason> {
        let (inner, mut registry) = tokenize(input).unwrap();
        let mut tokens = vec![Token::OpenParen];
        tokens.extend(inner);
        tokens.push(Token::CloseParen);
        for (name, value) in values {
            registry.set(name, *value);
        }
        evaluate(&tokens, &registry)
    }

    #[test]
    fn test_no_precedence_left_to_right() {
        assert_eq!(eval_with("a&b|c", &[("a", true), ("b", false), ("c", true)]), Ok(true));
        assert_eq!(eval_with("a|b&c", &[("a", false), ("b", true), ("c", false)]), Ok(false));
        // Standard precedence would give true here.
        assert_eq!(eval_with("a|b&c", &[("a", true), ("b", false), ("c", false)]), Ok(false));
    }

    #[test]
    fn test_parentheses_override_grouping() {
        let values = [("a", false), ("b", true), ("c", true)];
        assert_eq!(eval_with("a&(b|c)", &values), Ok(false));
        assert_eq!(eval_with("a&b|c", &values), Ok(true));
    }

    #[test]
    fn test_negation_binds_to_operand() {
        assert_eq!(eval_with("!a&b", &[("a", false), ("b", true)]), Ok(true));
        assert_eq!(eval_with("!(a&b)", &[("a", true), ("b", true)]), Ok(false));
        assert_eq!(eval_with("a&!b", &[("a", true), ("b", false)]), Ok(true));
    }

    #[test]
    fn test_negation_chains() {
        for x in [false, true] {
            assert_eq!(eval_with("!!v", &[("v", x)]), Ok(x));
            assert_eq!(eval_with("!!!v", &[("v", x)]), Ok(!x));
            assert_eq!(eval_with("!((!(v)))", &[("v", x)]), Ok(x));
        }
    }

    #[test]
    fn test_implication_chain_is_left_associative() {
        // (F -> F) -> F = T -> F = F; right association would give T.
        assert_eq!(eval_with("a->b->c", &[]), Ok(false));
        // (F <-> F) <-> F = T <-> F = F
        assert_eq!(eval_with("a<->b<->c", &[]), Ok(false));
    }

    #[test]
    fn test_malformed_inputs() {
        assert_eq!(eval_with("a&&b", &[]), Err(MalformedReason::MissingOperand));
        assert_eq!(eval_with("&a", &[]), Err(MalformedReason::MissingOperand));
        assert_eq!(eval_with("a&", &[]), Err(MalformedReason::MissingOperand));
        assert_eq!(eval_with("a!", &[]), Err(MalformedReason::MissingOperand));
        assert_eq!(eval_with("a&((b)", &[]), Err(MalformedReason::UnbalancedParentheses));
        assert_eq!(eval_with("a)&(b", &[]), Err(MalformedReason::UnbalancedParentheses));
        assert_eq!(eval_with("()", &[]), Err(MalformedReason::EmptyGroup));
        assert_eq!(eval_with("", &[]), Err(MalformedReason::EmptyGroup));
        assert_eq!(eval_with("a b", &[]), Err(MalformedReason::LeftoverOperands));
    }

    #[test]
    fn test_unwrapped_sequence_leftover() {
        let (tokens, registry) = tokenize("(a)(b)").unwrap();
        assert_eq!(evaluate(&tokens, &registry), Err(MalformedReason::LeftoverOperands));
    }

    #[test]
    #[should_panic(expected = "not registered")]
    fn test_unregistered_variable_panics() {
        let tokens = vec![Token::OpenParen, Token::var("ghost"), Token::CloseParen];
        let _ = evaluate(&tokens, &VariableRegistry::new());
    }
}
