use super::*;
use crate::instance::Instance;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_satisfiable_instance() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    assert!(solve_random_local_search(&instance, 1e-8, &mut rng));
}

#[test]
fn test_unsatisfiable_unit_pair() {
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    assert!(!solve_random_local_search(&instance, 1e-8, &mut rng));
}

#[test]
fn test_terminal_cases() {
    let mut rng = StdRng::seed_from_u64(2);
    let empty = Instance::from_literals([]).unwrap();
    assert!(solve_random_local_search(&empty, 1e-8, &mut rng));
    let conflict = Instance::from_literals([vec![]]).unwrap();
    assert!(!solve_random_local_search(&conflict, 1e-8, &mut rng));
}

#[test]
fn test_binomial() {
    use num_bigint::BigUint;
    assert_eq!(binomial(5, 0), BigUint::from(1u32));
    assert_eq!(binomial(5, 2), BigUint::from(10u32));
    assert_eq!(binomial(5, 5), BigUint::from(1u32));
    assert_eq!(binomial(3, 4), BigUint::from(0u32));
}
