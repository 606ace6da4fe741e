use super::*;
use crate::instance::Instance;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_satisfiable_instance() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    assert!(solve_two_sided_local_search(&instance, &mut rng));
}

#[test]
fn test_all_true_solution_is_reached_from_the_other_pole() {
    // The unique solution is all-true: distance 3 from the all-false pole,
    // beyond radius 2, but distance 0 from the all-true pole.
    let instance =
        Instance::from_literals([vec![1], vec![2], vec![3]]).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    assert!(solve_two_sided_local_search(&instance, &mut rng));
}

#[test]
fn test_unsatisfiable_unit_pair() {
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    assert!(!solve_two_sided_local_search(&instance, &mut rng));
}

#[test]
fn test_terminal_cases() {
    let mut rng = StdRng::seed_from_u64(3);
    let empty = Instance::from_literals([]).unwrap();
    assert!(solve_two_sided_local_search(&empty, &mut rng));
    let conflict = Instance::from_literals([vec![]]).unwrap();
    assert!(!solve_two_sided_local_search(&conflict, &mut rng));
}
