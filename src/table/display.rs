//! Fixed-width text rendering of truth tables
//!
//! One column per variable in declared order plus a trailing `value` column.
//! Each column is `max(len("False"), len(name)) + 1` characters wide and is
//! terminated by `"| "`. A rule of dashes as long as the header follows it.
//!
//! ```text
//! a     | b     | value |
//! ------------------------
//! False | False | False |
//! False | True  | False |
//! ```

use super::TruthTable;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const VALUE_HEADER: &str = "value";
const MIN_WIDTH: usize = "False".len();

fn column_width(header: &str) -> usize {
    header.chars().count().max(MIN_WIDTH) + 1
}

fn bool_text(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self
            .statement
            .variables()
            .iter()
            .map(|name| column_width(name))
            .chain(std::iter::once(column_width(VALUE_HEADER)))
            .collect();

        let mut header = String::new();
        let headers = self
            .statement
            .variables()
            .iter()
            .map(|name| name.as_ref())
            .chain(std::iter::once(VALUE_HEADER));
        for (name, width) in headers.zip(&widths) {
            header.push_str(&format!("{:<width$}| ", name, width = *width));
        }
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", "-".repeat(header.chars().count()))?;

        for row in &self.rows {
            let cells = row.assignment().iter().copied().chain(std::iter::once(row.value()));
            for (cell, width) in cells.zip(&widths) {
                write!(f, "{:<width$}| ", bool_text(cell), width = *width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl TruthTable {
    /// Write the formatted table to any `Write` implementation
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{}", self)
    }

    /// Write the formatted table to a file, replacing its contents
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()
    }
}
