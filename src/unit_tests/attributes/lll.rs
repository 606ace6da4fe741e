use super::*;
use crate::error::SatError;
use crate::instance::Instance;

#[test]
fn test_dense_uniform_instance_may_be_unsatisfiable() {
    // All 8 clauses over 3 variables: every clause has 7 neighbours ≥ 2^(3-2).
    let clauses = (0..8).map(|bits: i32| {
        vec![
            if bits & 1 == 0 { 1 } else { -1 },
            if bits & 2 == 0 { 2 } else { -2 },
            if bits & 4 == 0 { 3 } else { -3 },
        ]
    });
    let instance = Instance::from_literals(clauses).unwrap();
    assert_eq!(is_lll_satisfied(&instance), Ok(true));
}

#[test]
fn test_sparse_instance_is_trivially_satisfiable() {
    // Variable-disjoint clauses have no neighbours at all.
    let instance = Instance::from_literals([vec![1, 2], vec![3, 4]]).unwrap();
    assert_eq!(is_lll_satisfied(&instance), Ok(false));
}

#[test]
fn test_non_uniform_lengths_are_rejected() {
    let instance = Instance::from_literals([vec![1, 2], vec![3]]).unwrap();
    assert_eq!(is_lll_satisfied(&instance), Err(SatError::LllNotApplicable));
}

#[test]
fn test_empty_instance_is_trivially_satisfiable() {
    let instance = Instance::from_literals([]).unwrap();
    assert_eq!(is_lll_satisfied(&instance), Ok(false));
}
