use super::*;
use crate::error::SatError;

#[test]
fn test_from_literals() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    assert_eq!(instance.num_clauses(), 2);
    assert_eq!(instance.num_variables(), 3);
    assert_eq!(instance.max_variable(), 3);
    assert!(!instance.has_empty_clause());
}

#[test]
fn test_rejects_zero_literal() {
    let result = Instance::from_literals([vec![1, 0]]);
    assert_eq!(result, Err(SatError::ZeroLiteral { clause: 0 }));
}

#[test]
fn test_rejects_duplicate_literal() {
    let result = Instance::from_literals([vec![1, 2], vec![3, -2, 3]]);
    assert_eq!(
        result,
        Err(SatError::DuplicateLiteral {
            clause: 1,
            literal: 3
        })
    );
}

#[test]
fn test_accepts_complementary_pair() {
    // x ∨ ¬x is a tautology, not a duplicate; the kernelizer removes it.
    assert!(Instance::from_literals([vec![1, -1]]).is_ok());
}

#[test]
fn test_strict_requires_contiguity() {
    assert!(Instance::from_clauses_strict([vec![1, 2], vec![-2, 3]]).is_ok());
    let result = Instance::from_clauses_strict([vec![1, 4]]);
    assert_eq!(result, Err(SatError::NonContiguousVariables { expected: 2 }));
}

#[test]
fn test_all_variables() {
    let instance = Instance::from_literals([vec![5, -2], vec![-5, 7]]).unwrap();
    let variables: Vec<i32> = instance.all_variables().into_iter().collect();
    assert_eq!(variables, vec![2, 5, 7]);
    assert_eq!(instance.num_variables(), 3);
    assert_eq!(instance.max_variable(), 7);
}

#[test]
fn test_normalize_relabels_in_first_occurrence_order() {
    let instance = Instance::from_literals([vec![7, -3], vec![3, 9]]).unwrap();
    let normalized = instance.normalize();
    assert_eq!(
        normalized.clauses(),
        Instance::from_literals([vec![1, -2], vec![2, 3]])
            .unwrap()
            .clauses()
    );
}

#[test]
fn test_normalize_preserves_contiguous_labels() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    assert_eq!(instance.normalize(), instance);
}

#[test]
fn test_clause_lengths() {
    let instance = Instance::from_literals([vec![1], vec![1, 2, 3], vec![-2, 3]]).unwrap();
    assert_eq!(instance.longest_clause_length(), Some(3));
    assert_eq!(instance.shortest_clause_length(), Some(1));

    let empty = Instance::from_literals([]).unwrap();
    assert_eq!(empty.longest_clause_length(), None);
    assert!(empty.is_empty());
}

#[test]
fn test_empty_clause_detection() {
    let instance = Instance::from_literals([vec![1], vec![]]).unwrap();
    assert!(instance.has_empty_clause());
}

#[test]
fn test_display() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    assert_eq!(
        instance.to_string(),
        "Instance with 3 variables and 2 clauses"
    );
}
