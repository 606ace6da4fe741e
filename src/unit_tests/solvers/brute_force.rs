use super::*;
use crate::instance::Instance;

#[test]
fn test_satisfiable_instance() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    let outcome = solve_brute_force(&instance);
    assert!(outcome.satisfiable);
    assert!(outcome.iterations <= 8);
}

#[test]
fn test_unsatisfiable_instance() {
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    let outcome = solve_brute_force(&instance);
    assert!(!outcome.satisfiable);
    assert_eq!(outcome.iterations, 2);
}

#[test]
fn test_empty_instance_is_satisfiable() {
    let instance = Instance::from_literals([]).unwrap();
    assert!(solve_brute_force(&instance).satisfiable);
}

#[test]
fn test_empty_clause_is_unsatisfiable() {
    let instance = Instance::from_literals([vec![1], vec![]]).unwrap();
    assert!(!solve_brute_force(&instance).satisfiable);
}

#[test]
fn test_full_clause_set_enumerates_everything() {
    let clauses = (0..8).map(|bits: i32| {
        vec![
            if bits & 1 == 0 { 1 } else { -1 },
            if bits & 2 == 0 { 2 } else { -2 },
            if bits & 4 == 0 { 3 } else { -3 },
        ]
    });
    let instance = Instance::from_literals(clauses).unwrap();
    let outcome = solve_brute_force(&instance);
    assert!(!outcome.satisfiable);
    assert_eq!(outcome.iterations, 8);
}
