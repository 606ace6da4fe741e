use super::*;
use crate::error::SatError;
use bitvec::prelude::*;

fn example() -> Instance {
    // (x1 ∨ x2) ∧ (¬x2 ∨ x3)
    Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap()
}

#[test]
fn test_encoding_layout() {
    let matrix = example().bit_matrix().unwrap();
    assert_eq!(matrix.num_clauses(), 2);
    assert_eq!(matrix.num_variables(), 3);
    assert_eq!(matrix.to_string(), "101000\n000110");
}

#[test]
fn test_row_weight_is_clause_length() {
    let matrix = example().bit_matrix().unwrap();
    assert_eq!(matrix.row_weight(0), 2);
    assert_eq!(matrix.row_weight(1), 2);
}

#[test]
fn test_row_queries() {
    let matrix = example().bit_matrix().unwrap();
    assert!(matrix.row_has_variable(0, 0));
    assert!(matrix.row_has_variable(0, 1));
    assert!(!matrix.row_has_variable(0, 2));
    assert!(matrix.rows_share_variable(0, 1)); // x2 in both
    assert_eq!(matrix.variable_occurrences(1), (1, 1)); // x2: once each way
    assert_eq!(matrix.variable_occurrences(2), (1, 0)); // x3: positive only
}

#[test]
fn test_round_trip() {
    let instance = example();
    let decoded = Instance::from_bit_matrix(&instance.bit_matrix().unwrap());
    assert_eq!(decoded, instance);
}

#[test]
fn test_round_trip_normalizes_sparse_variables() {
    let instance = Instance::from_literals([vec![7, -9]]).unwrap();
    let decoded = Instance::from_bit_matrix(&instance.bit_matrix().unwrap());
    assert_eq!(decoded, instance.normalize());
}

#[test]
fn test_unavailable_with_empty_clause() {
    let instance = Instance::from_literals([vec![1], vec![]]).unwrap();
    assert!(matches!(
        instance.bit_matrix(),
        Err(SatError::BitMatrixUnavailable(_))
    ));
}

#[test]
fn test_unavailable_without_variables() {
    let instance = Instance::from_literals([]).unwrap();
    assert!(matches!(
        instance.bit_matrix(),
        Err(SatError::BitMatrixUnavailable(_))
    ));
}

#[test]
fn test_from_rows_validation() {
    assert!(BitMatrix::from_rows(vec![]).is_err());
    assert!(BitMatrix::from_rows(vec![bitvec![1, 0, 1]]).is_err());
    assert!(BitMatrix::from_rows(vec![bitvec![1, 0], bitvec![1, 0, 0, 0]]).is_err());
    let matrix = BitMatrix::from_rows(vec![bitvec![1, 0, 0, 1]]).unwrap();
    assert_eq!(matrix.num_variables(), 2);
    assert_eq!(
        Instance::from_bit_matrix(&matrix),
        Instance::from_literals([vec![1, -2]]).unwrap()
    );
}
