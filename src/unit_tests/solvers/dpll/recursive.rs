use super::*;
use crate::instance::Instance;
use crate::solvers::dpll::heuristics;
use crate::solvers::{solve_brute_force, solve_dpll};

#[test]
fn test_satisfiable_instance() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    assert!(solve_dpll_recursive(&instance, &mut heuristics::dlis));
}

#[test]
fn test_unsatisfiable_instance() {
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    assert!(!solve_dpll_recursive(&instance, &mut heuristics::dlis));
}

#[test]
fn test_terminal_cases() {
    let empty = Instance::from_literals([]).unwrap();
    assert!(solve_dpll_recursive(&empty, &mut heuristics::dlis));
    let conflict = Instance::from_literals([vec![]]).unwrap();
    assert!(!solve_dpll_recursive(&conflict, &mut heuristics::dlis));
}

#[test]
fn test_matches_iterative_form() {
    let cases = [
        vec![vec![1, 2, 3], vec![-1, -2], vec![2, -3], vec![-1, 3]],
        vec![vec![1, -2], vec![2, -3], vec![3, -1], vec![1, 2, 3], vec![-1, -2, -3]],
        vec![vec![1, 2], vec![1, -2], vec![-1, 2], vec![-1, -2]],
    ];
    for clauses in cases {
        let instance = Instance::from_literals(clauses).unwrap();
        let expected = solve_brute_force(&instance).satisfiable;
        assert_eq!(
            solve_dpll_recursive(&instance, &mut heuristics::mom),
            expected
        );
        assert_eq!(solve_dpll(&instance, heuristics::mom).satisfiable, expected);
    }
}
