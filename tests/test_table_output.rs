//! Formatted truth table output to writers and files

use std::fs;
use symbolic_logic::{Statement, TruthTable};

#[test]
fn test_table_to_file() -> std::io::Result<()> {
    let s = Statement::parse("a -> b").unwrap();
    let table = TruthTable::generate(&s).unwrap();

    let temp = tempfile::NamedTempFile::new()?;
    table.to_file(temp.path())?;

    let written = fs::read_to_string(temp.path())?;
    assert_eq!(written, table.to_string());
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 2 + 4);
    assert_eq!(lines[0], "a     | b     | value | ");
    assert_eq!(lines[1], "-".repeat(24));
    assert_eq!(lines[4], "True  | False | False | ");
    Ok(())
}

#[test]
fn test_partial_table_output() -> std::io::Result<()> {
    let s = Statement::parse("a&b|!(c|a)").unwrap();
    let table = TruthTable::generate_range(&s, 1, Some(5)).unwrap();

    let mut buffer = Vec::new();
    table.write_to(&mut buffer)?;
    let text = String::from_utf8(buffer).expect("table output is UTF-8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2 + 4);
    assert_eq!(lines[2], "False | False | True  | False | ");
    assert_eq!(lines[5], "True  | False | False | False | ");
    Ok(())
}

#[test]
fn test_to_file_into_missing_directory_fails() {
    let s = Statement::parse("a").unwrap();
    let table = TruthTable::generate(&s).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("table.txt");
    assert!(table.to_file(path).is_err());
}
