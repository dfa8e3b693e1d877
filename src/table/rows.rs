//! Lazy row iteration over a range of assignment indices

use super::error::TableError;
use super::TruthTableRow;
use crate::statement::{MalformedReason, Statement, VariableRegistry};

/// Largest number of variables whose assignment space fits in a `u64`
pub const MAX_VARIABLES: usize = 63;

/// Iterator over the rows of a truth table
///
/// Owns a private copy of the statement's registry and overwrites it for
/// every row, so rows are produced strictly one after another. Independent
/// iterators over the same statement never share state.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    statement: &'a Statement,
    registry: VariableRegistry,
    next: u64,
    end: u64,
}

impl Statement {
    /// Number of rows in the full truth table, `2^n`
    ///
    /// # Errors
    ///
    /// [`TableError::TooManyVariables`] if `2^n` does not fit in a `u64`.
    pub fn num_rows(&self) -> Result<u64, TableError> {
        let count = self.num_variables();
        if count > MAX_VARIABLES {
            return Err(TableError::TooManyVariables {
                count,
                max: MAX_VARIABLES,
            });
        }
        Ok(1u64 << count)
    }

    /// Iterate the rows for assignment indices in `[start, end)`
    ///
    /// `end` defaults to the full table size.
    ///
    /// # Errors
    ///
    /// - [`TableError::TooManyVariables`] if the table cannot be indexed
    /// - [`TableError::RangeOutOfBounds`] if `start > end` or `end > 2^n`
    ///
    /// # Examples
    ///
    /// ```
    /// use symbolic_logic::Statement;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let s = Statement::parse("a & b")?;
    /// let values: Vec<bool> = s
    ///     .rows(0, None)?
    ///     .map(|row| row.map(|r| r.value()))
    ///     .collect::<Result<_, _>>()?;
    /// assert_eq!(values, vec![false, false, false, true]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn rows(&self, start: u64, end: Option<u64>) -> Result<Rows<'_>, TableError> {
        let rows = self.num_rows()?;
        let end = end.unwrap_or(rows);
        if start > end || end > rows {
            return Err(TableError::RangeOutOfBounds { start, end, rows });
        }
        Ok(Rows::new(self, start, end))
    }
}

impl<'a> Rows<'a> {
    /// Rows over an already validated range
    pub(crate) fn new(statement: &'a Statement, start: u64, end: u64) -> Self {
        Rows {
            statement,
            registry: statement.registry().clone(),
            next: start,
            end,
        }
    }

    /// Assignment index of the next row to be produced
    pub fn next_index(&self) -> u64 {
        self.next
    }

    /// One past the assignment index of the last row
    pub fn end_index(&self) -> u64 {
        self.end
    }
}

impl Iterator for Rows<'_> {
    type Item = Result<TruthTableRow, MalformedReason>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;

        self.registry.assign_index(index);
        let row = self.statement.evaluate_in(&self.registry).map(|value| TruthTableRow {
            values: self.registry.iter().map(|(_, v)| v).collect(),
            value,
        });
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.end - self.next) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }
}
