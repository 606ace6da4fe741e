use super::*;
use crate::error::SatError;
use crate::instance::Instance;
use crate::solvers::solve_brute_force;

#[test]
fn test_satisfiable_two_sat() {
    let instance =
        Instance::from_literals([vec![1, 2], vec![-1, 3], vec![-2, -3]]).unwrap();
    assert_eq!(solve_two_sat(&instance), Ok(true));
}

#[test]
fn test_unsatisfiable_two_sat() {
    // (x1 ∨ x2)(x1 ∨ ¬x2)(¬x1 ∨ x2)(¬x1 ∨ ¬x2) forces both polarities of x1.
    let instance = Instance::from_literals([
        vec![1, 2],
        vec![1, -2],
        vec![-1, 2],
        vec![-1, -2],
    ])
    .unwrap();
    assert_eq!(solve_two_sat(&instance), Ok(false));
}

#[test]
fn test_unit_clauses_are_accepted() {
    let instance = Instance::from_literals([vec![1], vec![-1, 2]]).unwrap();
    assert_eq!(solve_two_sat(&instance), Ok(true));
    let contradiction = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    assert_eq!(solve_two_sat(&contradiction), Ok(false));
}

#[test]
fn test_empty_clause_is_unsatisfiable() {
    let instance = Instance::from_literals([vec![1, 2], vec![]]).unwrap();
    assert_eq!(solve_two_sat(&instance), Ok(false));
}

#[test]
fn test_wide_clauses_are_rejected() {
    let instance = Instance::from_literals([vec![1, 2, 3]]).unwrap();
    assert!(matches!(
        solve_two_sat(&instance),
        Err(SatError::UnsupportedInstance(_))
    ));
}

#[test]
fn test_agrees_with_brute_force() {
    let instances = [
        vec![vec![1, 2], vec![-1, 2], vec![1, -2]],
        vec![vec![1, 2], vec![-1, 3], vec![-2, -3], vec![1, -3]],
        vec![vec![1, -2], vec![2, -3], vec![3, -1], vec![-1, -2]],
    ];
    for clauses in instances {
        let instance = Instance::from_literals(clauses).unwrap();
        assert_eq!(
            solve_two_sat(&instance).unwrap(),
            solve_brute_force(&instance).satisfiable
        );
    }
}
