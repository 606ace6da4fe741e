use super::*;
use crate::instance::Instance;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_satisfiable_instance() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    assert!(solve_ppz(&instance, 1e-8, &mut rng));
}

#[test]
fn test_unit_pair_is_refuted() {
    // k = 1 makes the success probability 1, so the iteration budget is tiny
    // and every iteration deterministically derives the conflict.
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    assert!(!solve_ppz(&instance, 1e-8, &mut rng));
}

#[test]
fn test_full_clause_set_is_refuted() {
    let clauses = (0..8).map(|bits: i32| {
        vec![
            if bits & 1 == 0 { 1 } else { -1 },
            if bits & 2 == 0 { 2 } else { -2 },
            if bits & 4 == 0 { 3 } else { -3 },
        ]
    });
    let instance = Instance::from_literals(clauses).unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    assert!(!solve_ppz(&instance, 1e-8, &mut rng));
}

#[test]
fn test_terminal_cases() {
    let mut rng = StdRng::seed_from_u64(3);
    let empty = Instance::from_literals([]).unwrap();
    assert!(solve_ppz(&empty, 1e-8, &mut rng));
    let conflict = Instance::from_literals([vec![]]).unwrap();
    assert!(!solve_ppz(&conflict, 1e-8, &mut rng));
}

#[test]
fn test_implication_chain_is_found() {
    // Unit clauses steer most variables; the iteration budget makes a miss
    // across all rounds vanishingly unlikely.
    let instance =
        Instance::from_literals([vec![1], vec![-1, 2], vec![-2, 3]]).unwrap();
    for seed in 0..4 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert!(solve_ppz(&instance, 1e-8, &mut rng));
    }
}
