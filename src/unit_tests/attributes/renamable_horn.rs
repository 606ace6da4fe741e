use super::*;
use crate::instance::Instance;

#[test]
fn test_horn_formula_is_renamable_horn() {
    // Already Horn: at most one positive literal per clause.
    let instance =
        Instance::from_literals([vec![-1, -2, 3], vec![-1, 2], vec![1]]).unwrap();
    assert!(is_renamable_horn(&instance));
}

#[test]
fn test_flippable_formula_is_renamable_horn() {
    // Flipping x1 and x2 turns every clause Horn.
    let instance = Instance::from_literals([vec![1, 2, -3], vec![1, -2]]).unwrap();
    assert!(is_renamable_horn(&instance));
}

#[test]
fn test_full_clause_set_is_not_renamable_horn() {
    let clauses = (0..8).map(|bits: i32| {
        vec![
            if bits & 1 == 0 { 1 } else { -1 },
            if bits & 2 == 0 { 2 } else { -2 },
            if bits & 4 == 0 { 3 } else { -3 },
        ]
    });
    let instance = Instance::from_literals(clauses).unwrap();
    assert!(!is_renamable_horn(&instance));
}

#[test]
fn test_unit_clauses_only() {
    // F* is empty, hence satisfiable: unit clauses are Horn already.
    let instance = Instance::from_literals([vec![1], vec![-2]]).unwrap();
    assert!(is_renamable_horn(&instance));
}
