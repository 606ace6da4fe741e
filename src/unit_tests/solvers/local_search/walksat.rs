use super::*;
use crate::instance::Instance;
use crate::solvers::DEFAULT_WALK_PROBABILITY;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_satisfiable_instance() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let outcome = solve_walksat(&instance, 1000, DEFAULT_WALK_PROBABILITY, &mut rng);
    assert!(outcome.satisfiable);
}

#[test]
fn test_flips_are_confined_to_unsatisfied_clauses() {
    // x4 occurs only in an always-satisfied tautology, so WalkSAT never
    // needs it; the formula is solved through the first two clauses.
    let instance =
        Instance::from_literals([vec![1, 2], vec![-1, 2], vec![4, -4]]).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let outcome = solve_walksat(&instance, 1000, DEFAULT_WALK_PROBABILITY, &mut rng);
    assert!(outcome.satisfiable);
}

#[test]
fn test_unsatisfiable_instance_exhausts_tries() {
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    let outcome = solve_walksat(&instance, 10, DEFAULT_WALK_PROBABILITY, &mut rng);
    assert!(!outcome.satisfiable);
    assert_eq!(outcome.iterations, 20);
}

#[test]
fn test_terminal_cases() {
    let mut rng = StdRng::seed_from_u64(3);
    let empty = Instance::from_literals([]).unwrap();
    assert!(solve_walksat(&empty, 10, DEFAULT_WALK_PROBABILITY, &mut rng).satisfiable);
    let conflict = Instance::from_literals([vec![]]).unwrap();
    assert!(!solve_walksat(&conflict, 10, DEFAULT_WALK_PROBABILITY, &mut rng).satisfiable);
}
