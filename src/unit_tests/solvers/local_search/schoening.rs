use super::*;
use crate::instance::Instance;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_satisfiable_instance() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let outcome = solve_schoening(&instance, 1e-8, &mut rng);
    assert!(outcome.satisfiable);
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
    let mut rng = StdRng::seed_from_u64(1);
    let outcome = solve_schoening(&instance, 1e-8, &mut rng);
    assert!(!outcome.satisfiable);
}

#[test]
fn test_iteration_budget_scales_with_error_rate() {
    let instance = Instance::from_literals([
        vec![1, 2],
        vec![1, -2],
        vec![-1, 2],
        vec![-1, -2],
    ])
    .unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    let strict = solve_schoening(&instance, 1e-8, &mut rng);
    let mut rng = StdRng::seed_from_u64(2);
    let loose = solve_schoening(&instance, 1e-1, &mut rng);
    assert!(!strict.satisfiable && !loose.satisfiable);
    assert!(strict.iterations > loose.iterations);
}

#[test]
fn test_terminal_cases() {
    let mut rng = StdRng::seed_from_u64(3);
    let empty = Instance::from_literals([]).unwrap();
    assert!(solve_schoening(&empty, 1e-8, &mut rng).satisfiable);
    let conflict = Instance::from_literals([vec![]]).unwrap();
    assert!(!solve_schoening(&conflict, 1e-8, &mut rng).satisfiable);
}
