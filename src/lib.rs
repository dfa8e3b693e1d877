//! # Symbolic Logic
//!
//! Parsing, evaluation and truth tables for propositional logic statements.
//!
//! ## Overview
//!
//! A statement is written with the operators `!`, `&`, `|`, `->` and `<->`
//! (not, and, or, if-then, if-and-only-if) plus parentheses. Variable names
//! start with an ASCII letter and contain only ASCII letters, digits and
//! underscores.
//!
//! ```
//! use symbolic_logic::{Statement, TruthTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let s = Statement::parse("a&b|!(c|a)")?;
//! let table = TruthTable::generate(&s)?;
//! assert_eq!(table.len(), 8);
//! print!("{}", table);
//! # Ok(())
//! # }
//! ```
//!
//! ## Evaluation Order
//!
//! **The binary operators share one precedence level and are applied strictly
//! left to right.** `a & b | c` means `(a & b) | c`, and `a | b & c` means
//! `(a | b) & c`. Only parentheses change the grouping. Negation always
//! applies to the operand right after it.
//!
//! ```
//! use symbolic_logic::Statement;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut assignment = HashMap::new();
//! assignment.insert(Arc::from("a"), false);
//! assignment.insert(Arc::from("b"), true);
//! assignment.insert(Arc::from("c"), false);
//!
//! // (a | b) & c
//! assert!(!Statement::parse("a|b&c")?.evaluate(&assignment)?);
//! // a | (b & c)
//! assert!(!Statement::parse("a|(b&c)")?.evaluate(&assignment)?);
//! // (a | b) & !c
//! assert!(Statement::parse("a|b&!c")?.evaluate(&assignment)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Truth Tables
//!
//! Rows are numbered by an *assignment index* in `[0, 2^n)`. The last variable
//! (in order of first occurrence) is bit 0 and changes fastest. A table can
//! cover a sub-range of the indices, and large ranges can be split over
//! several threads:
//!
//! ```
//! use symbolic_logic::{Statement, TableConfig, TruthTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let s = Statement::parse("a -> (b <-> c)")?;
//! let part = TruthTable::generate_range(&s, 1, Some(3))?;
//! assert_eq!(part.len(), 2);
//!
//! let config = TableConfig { threads: 4, ..Default::default() };
//! let full = TruthTable::generate_with(&s, &config)?;
//! assert_eq!(full.rows()[1..3], part.rows()[..]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Combining Statements
//!
//! [`combine`] joins two statements (or raw strings) with OR:
//!
//! ```
//! use symbolic_logic::{combine, Statement};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let s = Statement::parse("a&b")?;
//! let f = combine(&s, "c&d")?;
//! assert_eq!(f.num_variables(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! [`Statement`] is immutable and `Send + Sync`. Every evaluation works on its
//! own copy of the variable registry, so a statement can be evaluated from
//! any number of threads at once.

// Public modules
pub mod error;
pub mod statement;
pub mod table;

// Re-export high-level public API
pub use error::LogicError;
pub use statement::{
    combine, combine_dyn, BinaryOp, CombineInput, MalformedReason, ParseStatementError,
    Statement, Token, VariableRegistry,
};
pub use table::{Rows, TableConfig, TableError, TruthTable, TruthTableRow, MAX_VARIABLES};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_thread_safe() {
        assert_send_sync::<Statement>();
        assert_send_sync::<TruthTable>();
        assert_send_sync::<VariableRegistry>();
        assert_send_sync::<LogicError>();
    }
}
