//! Truth table generation
//!
//! A truth table for a statement with `n` variables has `2^n` rows, one per
//! *assignment index*. Bit `j` of the index (bit 0 least significant) is the
//! value of the `j`-th variable counted from the end of the statement's
//! variable order: the last variable changes fastest and the first one
//! slowest. Each row lists the variable values in declared order followed by
//! the value of the statement.
//!
//! ```
//! use symbolic_logic::{Statement, TruthTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let s = Statement::parse("a&b|!(c|a)")?;
//! let table = TruthTable::generate(&s)?;
//! print!("{}", table);
//! // a     | b     | c     | value |
//! // --------------------------------
//! // False | False | False | True  |
//! // False | False | True  | False |
//! // ...
//! # Ok(())
//! # }
//! ```
//!
//! Generation is exponential in the number of variables. Use a sub-range
//! ([`TruthTable::generate_range`]) or several threads
//! ([`TableConfig::threads`]) for large statements.

mod display;
pub mod error;
mod rows;

pub use error::TableError;
pub use rows::{Rows, MAX_VARIABLES};

use crate::error::LogicError;
use crate::statement::Statement;
use log::debug;
use std::thread;

/// Configuration for truth table generation
///
/// # Examples
///
/// ```
/// use symbolic_logic::{Statement, TableConfig, TruthTable};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let s = Statement::parse("a & b & c")?;
/// let config = TableConfig {
///     start: 2,
///     end: Some(6),
///     ..Default::default()
/// };
/// let table = TruthTable::generate_with(&s, &config)?;
/// assert_eq!(table.len(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// First assignment index to generate
    ///
    /// **Default:** `0`
    pub start: u64,

    /// One past the last assignment index to generate
    ///
    /// **Default:** `None` (the full table, `2^n`)
    pub end: Option<u64>,

    /// Number of worker threads
    ///
    /// The range is split into contiguous chunks, one per thread, and each
    /// worker evaluates against its own copy of the variable registry. The
    /// result is identical to sequential generation.
    ///
    /// **Default:** `1` (generate on the calling thread)
    pub threads: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            start: 0,
            end: None,
            threads: 1,
        }
    }
}

/// One row of a truth table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruthTableRow {
    values: Vec<bool>,
    value: bool,
}

impl TruthTableRow {
    /// Variable values, in the statement's declared order
    pub fn assignment(&self) -> &[bool] {
        &self.values
    }

    /// Value of the statement under this assignment
    pub fn value(&self) -> bool {
        self.value
    }

    /// Variable values followed by the statement's value
    pub fn to_vec(&self) -> Vec<bool> {
        let mut cells = self.values.clone();
        cells.push(self.value);
        cells
    }
}

/// A (possibly partial) truth table of a statement
///
/// Covers the contiguous range `[start, end)` of assignment indices, with
/// rows in increasing index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    statement: Statement,
    start: u64,
    end: u64,
    rows: Vec<TruthTableRow>,
}

impl TruthTable {
    /// Generate the full truth table
    ///
    /// # Errors
    ///
    /// [`LogicError::Table`] if the statement has more than
    /// [`MAX_VARIABLES`] variables.
    pub fn generate(statement: &Statement) -> Result<Self, LogicError> {
        Self::generate_with(statement, &TableConfig::default())
    }

    /// Generate rows for assignment indices in `[start, end)`
    ///
    /// `end` defaults to `2^n`. The rows are identical to the corresponding
    /// rows of the full table.
    ///
    /// # Errors
    ///
    /// [`LogicError::Table`] if the range is outside the table.
    pub fn generate_range(
        statement: &Statement,
        start: u64,
        end: Option<u64>,
    ) -> Result<Self, LogicError> {
        Self::generate_with(
            statement,
            &TableConfig {
                start,
                end,
                ..Default::default()
            },
        )
    }

    /// Generate a table as described by `config`
    ///
    /// # Errors
    ///
    /// [`LogicError::Table`] for an invalid range, [`LogicError::Malformed`]
    /// if a row fails to evaluate.
    pub fn generate_with(statement: &Statement, config: &TableConfig) -> Result<Self, LogicError> {
        let range = statement.rows(config.start, config.end)?;
        let start = range.next_index();
        let end = range.end_index();
        debug!(
            "Generating rows [{}, {}) of {:?} on {} thread(s)",
            start, end, statement.to_string(), config.threads
        );

        let rows = if config.threads > 1 && end - start > 1 {
            generate_parallel(statement, start, end, config.threads)?
        } else {
            range.collect::<Result<Vec<_>, _>>()?
        };

        Ok(TruthTable {
            statement: statement.clone(),
            start,
            end,
            rows,
        })
    }

    /// The statement this table was generated from
    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    /// The generated rows in increasing assignment index order
    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    /// Assignment index of the first row
    pub fn start(&self) -> u64 {
        self.start
    }

    /// One past the assignment index of the last row
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate `(assignment_index, row)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (u64, &TruthTableRow)> + '_ {
        (self.start..).zip(self.rows.iter())
    }
}

impl<'a> IntoIterator for &'a TruthTable {
    type Item = &'a TruthTableRow;
    type IntoIter = std::slice::Iter<'a, TruthTableRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Split `[start, end)` into contiguous chunks and evaluate each on its own
/// thread with its own registry
fn generate_parallel(
    statement: &Statement,
    start: u64,
    end: u64,
    threads: usize,
) -> Result<Vec<TruthTableRow>, LogicError> {
    let total = end - start;
    let workers = (threads as u64).min(total);
    let chunk = total.div_ceil(workers);

    thread::scope(|scope| -> Result<Vec<TruthTableRow>, LogicError> {
        let handles: Vec<_> = (0..workers)
            .map(|worker| start + worker * chunk)
            .take_while(|&lo| lo < end)
            .map(|lo| {
                let hi = (lo + chunk).min(end);
                debug!("Worker for rows [{}, {})", lo, hi);
                scope.spawn(move || Rows::new(statement, lo, hi).collect::<Result<Vec<_>, _>>())
            })
            .collect();

        let mut rows = Vec::with_capacity(usize::try_from(total).unwrap_or(0));
        for handle in handles {
            match handle.join() {
                Ok(chunk) => rows.extend(chunk?),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        Ok(rows)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_full_table_row_order() {
        let s = Statement::parse("a&b").unwrap();
        let table = TruthTable::generate(&s).unwrap();
        let cells: Vec<Vec<bool>> = table.rows().iter().map(|r| r.to_vec()).collect();
        assert_eq!(
            cells,
            vec![
                vec![false, false, false],
                vec![false, true, false],
                vec![true, false, false],
                vec![true, true, true],
            ]
        );
        assert_eq!(table.start(), 0);
        assert_eq!(table.end(), 4);
    }

    #[test]
    fn test_sage_example_rows() {
        let s = Statement::parse("a&b|!(c|a)").unwrap();
        let values: Vec<bool> = TruthTable::generate(&s)
            .unwrap()
            .rows()
            .iter()
            .map(|r| r.value())
            .collect();
        assert_eq!(
            values,
            vec![true, false, true, false, false, false, true, true]
        );
    }

    #[test]
    fn test_partial_range_matches_full() {
        let s = Statement::parse("a&b|!(c|a)").unwrap();
        let full = TruthTable::generate(&s).unwrap();
        let part = TruthTable::generate_range(&s, 1, Some(5)).unwrap();
        assert_eq!(part.len(), 4);
        assert_eq!(part.rows(), &full.rows()[1..5]);
        let indices: Vec<u64> = part.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_threads_match_sequential() {
        let s = Statement::parse("(a -> b) <-> !(c & d) | e").unwrap();
        let sequential = TruthTable::generate(&s).unwrap();
        for threads in [2, 3, 7, 64] {
            let config = TableConfig {
                threads,
                ..Default::default()
            };
            let parallel = TruthTable::generate_with(&s, &config).unwrap();
            assert_eq!(parallel, sequential, "threads = {}", threads);
        }
    }

    #[test]
    fn test_invalid_range() {
        let s = Statement::parse("a").unwrap();
        let err = TruthTable::generate_range(&s, 0, Some(5)).unwrap_err();
        assert!(matches!(
            err,
            LogicError::Table(TableError::RangeOutOfBounds { .. })
        ));
    }
}
