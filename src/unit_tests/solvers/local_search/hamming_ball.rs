use super::*;
use crate::instance::{Assignment, Instance};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_satisfying_start_needs_no_radius() {
    let instance = Instance::from_literals([vec![1, 2]]).unwrap();
    let assignment = Assignment::from([(1, true), (2, false)]);
    let mut rng = StdRng::seed_from_u64(0);
    assert!(search_hamming_ball(&instance, &assignment, 0, &mut rng));
}

#[test]
fn test_radius_zero_cannot_move() {
    let instance = Instance::from_literals([vec![1]]).unwrap();
    let assignment = Assignment::from([(1, false)]);
    let mut rng = StdRng::seed_from_u64(0);
    assert!(!search_hamming_ball(&instance, &assignment, 0, &mut rng));
}

#[test]
fn test_single_flip_within_radius() {
    let instance = Instance::from_literals([vec![1]]).unwrap();
    let assignment = Assignment::from([(1, false)]);
    let mut rng = StdRng::seed_from_u64(0);
    assert!(search_hamming_ball(&instance, &assignment, 1, &mut rng));
}

#[test]
fn test_flips_follow_unsatisfied_clauses() {
    // From all-false, (x1 ∨ x2) is unsatisfied; flipping either variable
    // satisfies the formula.
    let instance = Instance::from_literals([vec![1, 2], vec![-1, -2]]).unwrap();
    let assignment = Assignment::constant([1, 2], false);
    let mut rng = StdRng::seed_from_u64(0);
    assert!(search_hamming_ball(&instance, &assignment, 1, &mut rng));
}

#[test]
fn test_unsatisfiable_within_radius() {
    // The only satisfying assignment is at distance 3.
    let instance =
        Instance::from_literals([vec![1], vec![2], vec![3]]).unwrap();
    let assignment = Assignment::constant([1, 2, 3], false);
    let mut rng = StdRng::seed_from_u64(0);
    assert!(!search_hamming_ball(&instance, &assignment, 2, &mut rng));
    assert!(search_hamming_ball(&instance, &assignment, 3, &mut rng));
}

#[test]
fn test_unsatisfiable_instance_is_never_found() {
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    for radius in 0..3 {
        let mut rng = StdRng::seed_from_u64(radius as u64);
        let assignment = Assignment::from([(1, false)]);
        assert!(!search_hamming_ball(&instance, &assignment, radius, &mut rng));
    }
}
