use super::*;
use crate::instance::Instance;

#[test]
fn test_unit_pair_reaches_the_bound() {
    // n = 1: each unit clause excludes 2^0 assignments, together 2 ≥ 2^1.
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    assert!(is_biathlet_satisfied(&instance));
}

#[test]
fn test_single_clause_is_trivially_satisfiable() {
    // One 2-clause excludes 1 of 4 assignments.
    let instance = Instance::from_literals([vec![1, 2]]).unwrap();
    assert!(!is_biathlet_satisfied(&instance));
}

#[test]
fn test_tautologies_exclude_nothing() {
    let instance = Instance::from_literals([vec![1, -1]]).unwrap();
    assert!(!is_biathlet_satisfied(&instance));
}

#[test]
fn test_full_clause_set_reaches_the_bound() {
    let clauses = (0..8).map(|bits: i32| {
        vec![
            if bits & 1 == 0 { 1 } else { -1 },
            if bits & 2 == 0 { 2 } else { -2 },
            if bits & 4 == 0 { 3 } else { -3 },
        ]
    });
    let instance = Instance::from_literals(clauses).unwrap();
    // 8 · 2^(3-3) = 8 = 2^3.
    assert!(is_biathlet_satisfied(&instance));
}

#[test]
fn test_empty_instance() {
    let instance = Instance::from_literals([]).unwrap();
    assert!(!is_biathlet_satisfied(&instance));
}
