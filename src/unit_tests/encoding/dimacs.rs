use super::*;
use crate::error::SatError;
use crate::instance::Instance;

const EXAMPLE: &str = "c example formula\np cnf 3 2\n1 2 0\n-2 3 0";

#[test]
fn test_parse_basic_document() {
    let instance = parse_dimacs(EXAMPLE).unwrap();
    assert_eq!(
        instance,
        Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap()
    );
}

#[test]
fn test_comments_and_blank_padding_are_tolerated() {
    let input = "c one\nc two\n  p cnf 2 1  \n  1   -2  0  ";
    let instance = parse_dimacs(input).unwrap();
    assert_eq!(instance, Instance::from_literals([vec![1, -2]]).unwrap());
}

#[test]
fn test_percent_truncates_the_input() {
    let input = "p cnf 2 1\n1 -2 0\n%\nanything goes here";
    let instance = parse_dimacs(input).unwrap();
    assert_eq!(instance.num_clauses(), 1);
}

#[test]
fn test_duplicate_clause_lines_are_merged() {
    let input = "p cnf 2 3\n1 2 0\n1 2 0\n-1 2 0";
    let instance = parse_dimacs(input).unwrap();
    assert_eq!(instance.num_clauses(), 2);
}

#[test]
fn test_malformed_header_is_rejected() {
    assert!(matches!(
        parse_dimacs("p cnf 0 1\n1 0"),
        Err(SatError::ParseError(_))
    ));
    assert!(matches!(
        parse_dimacs("p dnf 1 1\n1 0"),
        Err(SatError::ParseError(_))
    ));
    assert!(matches!(parse_dimacs(""), Err(SatError::ParseError(_))));
}

#[test]
fn test_clause_count_mismatch_is_rejected() {
    assert!(matches!(
        parse_dimacs("p cnf 2 2\n1 2 0"),
        Err(SatError::ParseError(_))
    ));
}

#[test]
fn test_missing_terminator_is_rejected() {
    assert!(matches!(
        parse_dimacs("p cnf 2 1\n1 2"),
        Err(SatError::ParseError(_))
    ));
}

#[test]
fn test_variable_range_must_match_header() {
    // Header promises 3 variables, clauses use only 2.
    assert!(matches!(
        parse_dimacs("p cnf 3 1\n1 2 0"),
        Err(SatError::ParseError(_))
    ));
    // Variable 4 is outside 1..=3.
    assert!(matches!(
        parse_dimacs("p cnf 3 2\n1 2 0\n4 -1 0"),
        Err(SatError::ParseError(_))
    ));
}

#[test]
fn test_write_round_trip() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    let document = write_dimacs(&instance);
    assert_eq!(document, "p cnf 3 2\n1 2 0\n-2 3 0");
    assert_eq!(parse_dimacs(&document).unwrap(), instance);
}
