//! Truth table generation: row order, bit mapping and ranges

use symbolic_logic::{LogicError, Statement, TableConfig, TableError, TruthTable};

fn cells(table: &TruthTable) -> Vec<Vec<bool>> {
    table.rows().iter().map(|r| r.to_vec()).collect()
}

#[test]
fn test_two_variable_completeness() {
    let s = Statement::parse("a&b").unwrap();
    let table = TruthTable::generate(&s).unwrap();
    assert_eq!(
        cells(&table),
        vec![
            vec![false, false, false],
            vec![false, true, false],
            vec![true, false, false],
            vec![true, true, true],
        ]
    );
}

#[test]
fn test_first_discovered_variable_changes_slowest() {
    // b is discovered first, so it is the high-order bit.
    let s = Statement::parse("b | a").unwrap();
    let table = TruthTable::generate(&s).unwrap();
    let assignments: Vec<Vec<bool>> = table
        .rows()
        .iter()
        .map(|r| r.assignment().to_vec())
        .collect();
    assert_eq!(
        assignments,
        vec![
            vec![false, false],
            vec![false, true],
            vec![true, false],
            vec![true, true],
        ]
    );
    let names: Vec<&str> = table
        .statement()
        .variables()
        .iter()
        .map(|n| n.as_ref())
        .collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn test_partial_range_rows_match_full_table() {
    let s = Statement::parse("a&b").unwrap();
    let full = TruthTable::generate(&s).unwrap();
    let part = TruthTable::generate_range(&s, 1, Some(3)).unwrap();
    assert_eq!(part.len(), 2);
    assert_eq!(part.rows(), &full.rows()[1..3]);
    assert_eq!((part.start(), part.end()), (1, 3));
}

#[test]
fn test_range_with_default_end() {
    let s = Statement::parse("a | b | c").unwrap();
    let tail = TruthTable::generate_range(&s, 6, None).unwrap();
    assert_eq!(tail.len(), 2);
    assert_eq!(tail.end(), 8);
    assert!(tail.rows().iter().all(|r| r.value()));
}

#[test]
fn test_empty_range() {
    let s = Statement::parse("a").unwrap();
    let table = TruthTable::generate_range(&s, 1, Some(1)).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_out_of_range_is_an_error() {
    let s = Statement::parse("a & b").unwrap();
    for (start, end) in [(0, Some(5)), (3, Some(2)), (5, None)] {
        let err = TruthTable::generate_range(&s, start, end).unwrap_err();
        assert!(
            matches!(err, LogicError::Table(TableError::RangeOutOfBounds { .. })),
            "[{}, {:?})",
            start,
            end
        );
    }
}

#[test]
fn test_sage_partial_table() {
    let s = Statement::parse("a&b|!(c|a)").unwrap();
    let table = TruthTable::generate_range(&s, 1, Some(5)).unwrap();
    assert_eq!(
        cells(&table),
        vec![
            vec![false, false, true, false],
            vec![false, true, false, true],
            vec![false, true, true, false],
            vec![true, false, false, false],
        ]
    );
}

#[test]
fn test_table_config_threads() {
    let s = Statement::parse("a & !b -> (c <-> d) | e & f").unwrap();
    let sequential = TruthTable::generate(&s).unwrap();
    let config = TableConfig {
        start: 5,
        end: Some(61),
        threads: 4,
    };
    let threaded = TruthTable::generate_with(&s, &config).unwrap();
    assert_eq!(threaded.rows(), &sequential.rows()[5..61]);
    let indices: Vec<u64> = threaded.iter().map(|(i, _)| i).collect();
    assert_eq!(indices, (5..61).collect::<Vec<_>>());
}

#[test]
fn test_rows_evaluate_consistently() {
    use std::collections::HashMap;
    use std::sync::Arc;

    let s = Statement::parse("(p -> q) & (q -> r) -> (p -> r)").unwrap();
    let table = TruthTable::generate(&s).unwrap();
    for row in &table {
        let assignment: HashMap<Arc<str>, bool> = s
            .variables()
            .iter()
            .cloned()
            .zip(row.assignment().iter().copied())
            .collect();
        assert_eq!(s.evaluate(&assignment).unwrap(), row.value());
    }
}
