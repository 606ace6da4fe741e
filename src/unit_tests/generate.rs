use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_shape_of_generated_instance() {
    let mut rng = StdRng::seed_from_u64(0);
    let instance = random_k_sat(10, 30, 3, &mut rng).unwrap();
    assert_eq!(instance.num_clauses(), 30);
    assert!(instance.clauses().iter().all(|clause| clause.len() == 3));
    assert!(instance.max_variable() <= 10);
}

#[test]
fn test_clause_variables_are_distinct() {
    let mut rng = StdRng::seed_from_u64(1);
    let instance = random_k_sat(5, 50, 4, &mut rng).unwrap();
    for clause in instance.clauses() {
        let mut variables: Vec<i32> = clause.variables().collect();
        variables.sort_unstable();
        variables.dedup();
        assert_eq!(variables.len(), 4);
    }
}

#[test]
fn test_k_may_equal_n() {
    let mut rng = StdRng::seed_from_u64(2);
    let instance = random_k_sat(3, 5, 3, &mut rng).unwrap();
    assert!(instance.clauses().iter().all(|clause| clause.len() == 3));
}

#[test]
fn test_k_larger_than_n_is_rejected() {
    let mut rng = StdRng::seed_from_u64(3);
    assert!(random_k_sat(2, 5, 3, &mut rng).is_err());
}

#[test]
fn test_fixed_seed_reproduces_the_instance() {
    let mut first_rng = StdRng::seed_from_u64(42);
    let mut second_rng = StdRng::seed_from_u64(42);
    let first = random_k_sat(8, 20, 3, &mut first_rng).unwrap();
    let second = random_k_sat(8, 20, 3, &mut second_rng).unwrap();
    assert_eq!(first, second);
}
