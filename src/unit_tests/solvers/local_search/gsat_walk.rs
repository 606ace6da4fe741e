use super::*;
use crate::instance::Instance;
use crate::solvers::DEFAULT_WALK_PROBABILITY;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_satisfiable_instance() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let outcome = solve_gsat_with_walk(&instance, 1000, DEFAULT_WALK_PROBABILITY, &mut rng);
    assert!(outcome.satisfiable);
}

#[test]
fn test_pure_walk_still_converges() {
    // walk_probability = 1.0: every step is a random walk step.
    let instance =
        Instance::from_literals([vec![1, 2], vec![-1, 2], vec![2, 3]]).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let outcome = solve_gsat_with_walk(&instance, 1000, 1.0, &mut rng);
    assert!(outcome.satisfiable);
}

#[test]
fn test_pure_greedy_matches_gsat_shape() {
    // walk_probability = 0.0 degenerates to plain GSAT.
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    let outcome = solve_gsat_with_walk(&instance, 5, 0.0, &mut rng);
    assert!(!outcome.satisfiable);
    assert_eq!(outcome.iterations, 10);
}

#[test]
fn test_terminal_cases() {
    let mut rng = StdRng::seed_from_u64(3);
    let empty = Instance::from_literals([]).unwrap();
    assert!(
        solve_gsat_with_walk(&empty, 10, DEFAULT_WALK_PROBABILITY, &mut rng).satisfiable
    );
    let conflict = Instance::from_literals([vec![]]).unwrap();
    assert!(
        !solve_gsat_with_walk(&conflict, 10, DEFAULT_WALK_PROBABILITY, &mut rng).satisfiable
    );
}
