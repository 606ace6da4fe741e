use super::*;
use crate::instance::Instance;

#[test]
fn test_remove_unit_clause() {
    // Assigning x1 ↦ true collapses ¬x1 to the empty clause.
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    let reduced = remove_unit_clause(&instance).unwrap();
    assert_eq!(reduced, Instance::from_literals([vec![]]).unwrap());
}

#[test]
fn test_remove_unit_clause_simplifies_neighbours() {
    let instance = Instance::from_literals([vec![-2], vec![1, 2], vec![2, 3]]).unwrap();
    let reduced = remove_unit_clause(&instance).unwrap();
    assert_eq!(reduced, Instance::from_literals([vec![1], vec![3]]).unwrap());
}

#[test]
fn test_remove_unit_clause_without_units() {
    let instance = Instance::from_literals([vec![1, 2]]).unwrap();
    assert!(remove_unit_clause(&instance).is_none());
}

#[test]
fn test_remove_tautological_clauses() {
    let instance = Instance::from_literals([vec![1, -1], vec![2, 3]]).unwrap();
    let reduced = remove_tautological_clauses(&instance).unwrap();
    assert_eq!(reduced, Instance::from_literals([vec![2, 3]]).unwrap());
    assert!(remove_tautological_clauses(&reduced).is_none());
}

#[test]
fn test_remove_duplicate_clauses() {
    let instance =
        Instance::from_literals([vec![1, 2], vec![2, 1], vec![3, 4]]).unwrap();
    let reduced = remove_duplicate_and_superset_clauses(&instance).unwrap();
    assert_eq!(
        reduced,
        Instance::from_literals([vec![1, 2], vec![3, 4]]).unwrap()
    );
}

#[test]
fn test_remove_superset_clauses() {
    // (x1 ∨ x2 ∨ x3) is subsumed by (x1 ∨ x2).
    let instance =
        Instance::from_literals([vec![1, 2, 3], vec![1, 2], vec![2, 4]]).unwrap();
    let reduced = remove_duplicate_and_superset_clauses(&instance).unwrap();
    assert_eq!(
        reduced,
        Instance::from_literals([vec![1, 2], vec![2, 4]]).unwrap()
    );
}

#[test]
fn test_equal_clauses_do_not_subsume_each_other() {
    let instance = Instance::from_literals([vec![1, 2], vec![3, 4]]).unwrap();
    assert!(remove_duplicate_and_superset_clauses(&instance).is_none());
}

#[test]
fn test_remove_pure_literal() {
    // x1 is pure positive; assigning it removes both clauses.
    let instance = Instance::from_literals([vec![1, 2], vec![1, -2]]).unwrap();
    let reduced = remove_pure_literal(&instance).unwrap();
    assert!(reduced.is_empty());
}

#[test]
fn test_merge_twin_clauses() {
    // (x2 ∨ x1) and (x2 ∨ ¬x1) resolve to (x2).
    let instance =
        Instance::from_literals([vec![2, 1], vec![2, -1], vec![3, 4]]).unwrap();
    let reduced = merge_twin_clauses(&instance).unwrap();
    assert_eq!(
        reduced,
        Instance::from_literals([vec![2], vec![3, 4]]).unwrap()
    );
}

#[test]
fn test_twins_require_a_single_complementary_pair() {
    // The clauses differ in two variables: no merge.
    let instance = Instance::from_literals([vec![1, 2], vec![-1, 3]]).unwrap();
    assert!(merge_twin_clauses(&instance).is_none());
    // Same literals in different order are duplicates, not twins.
    let duplicate = Instance::from_literals([vec![1, 2], vec![2, 1]]).unwrap();
    assert!(merge_twin_clauses(&duplicate).is_none());
}
