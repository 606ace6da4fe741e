use super::*;
use crate::instance::{Assignment, Instance};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_best_flip_maximizes_satisfied_clauses() {
    // From all-false only (¬x1 ∨ x2) holds; flipping x2 satisfies all three.
    let instance =
        Instance::from_literals([vec![1, 2], vec![2, 3], vec![-1, 2]]).unwrap();
    let assignment = Assignment::constant([1, 2, 3], false);
    let mut rng = StdRng::seed_from_u64(0);
    let variable = best_flip(&instance, &assignment, &[1, 2, 3], &mut rng);
    assert_eq!(variable, 2);
}

#[test]
fn test_satisfiable_instance() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let outcome = solve_gsat(&instance, 1000, &mut rng);
    assert!(outcome.satisfiable);
    assert!(outcome.iterations >= 1);
}

#[test]
fn test_unsatisfiable_instance_exhausts_tries() {
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let outcome = solve_gsat(&instance, 10, &mut rng);
    assert!(!outcome.satisfiable);
    // 10 tries × 2n flips with n = 1.
    assert_eq!(outcome.iterations, 20);
}

#[test]
fn test_terminal_cases() {
    let mut rng = StdRng::seed_from_u64(0);
    let empty = Instance::from_literals([]).unwrap();
    assert!(solve_gsat(&empty, 10, &mut rng).satisfiable);
    let conflict = Instance::from_literals([vec![]]).unwrap();
    assert!(!solve_gsat(&conflict, 10, &mut rng).satisfiable);
}
