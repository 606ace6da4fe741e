use super::*;
use crate::instance::Instance;
use crate::solvers::solve_brute_force;

#[test]
fn test_satisfiable_instance() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    for autark in [false, true] {
        assert!(solve_monien_speckenmeyer(&instance, autark).satisfiable);
        assert!(solve_monien_speckenmeyer_recursive(&instance, autark));
    }
}

#[test]
fn test_unsatisfiable_instance() {
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    for autark in [false, true] {
        assert!(!solve_monien_speckenmeyer(&instance, autark).satisfiable);
        assert!(!solve_monien_speckenmeyer_recursive(&instance, autark));
    }
}

#[test]
fn test_terminal_cases() {
    let empty = Instance::from_literals([]).unwrap();
    assert!(solve_monien_speckenmeyer(&empty, false).satisfiable);
    let conflict = Instance::from_literals([vec![]]).unwrap();
    assert!(!solve_monien_speckenmeyer(&conflict, false).satisfiable);
}

#[test]
fn test_branch_order_explores_first_literal_first() {
    // The first branch {x1 ↦ true} already satisfies everything: two pops.
    let instance = Instance::from_literals([vec![1, 2], vec![1, 3]]).unwrap();
    let outcome = solve_monien_speckenmeyer(&instance, false);
    assert!(outcome.satisfiable);
    assert_eq!(outcome.iterations, 2);
}

#[test]
fn test_autark_shortcut_skips_branching() {
    // {x1 ↦ true} is autark (it touches only clauses it satisfies), so the
    // autark variant replaces the node instead of branching.
    let instance =
        Instance::from_literals([vec![1, 2], vec![1, 3], vec![4, 5]]).unwrap();
    let plain = solve_monien_speckenmeyer(&instance, false);
    let autark = solve_monien_speckenmeyer(&instance, true);
    assert!(plain.satisfiable && autark.satisfiable);
    assert!(autark.iterations <= plain.iterations);
}

#[test]
fn test_agrees_with_brute_force() {
    let cases = [
        vec![vec![1, 2, 3], vec![-1, -2], vec![2, -3], vec![-1, 3]],
        vec![vec![1, 2], vec![1, -2], vec![-1, 2], vec![-1, -2]],
        vec![vec![1, -2], vec![2, -3], vec![3, -1], vec![1, 2, 3], vec![-1, -2, -3]],
    ];
    for clauses in cases {
        let instance = Instance::from_literals(clauses).unwrap();
        let expected = solve_brute_force(&instance).satisfiable;
        for autark in [false, true] {
            assert_eq!(
                solve_monien_speckenmeyer(&instance, autark).satisfiable,
                expected
            );
            assert_eq!(
                solve_monien_speckenmeyer_recursive(&instance, autark),
                expected
            );
        }
    }
}
