use super::*;
use crate::instance::Instance;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_satisfiable_instance() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    assert!(solve_dantsin(&instance, &mut rng));
}

#[test]
fn test_unsatisfiable_unit_pair() {
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    assert!(!solve_dantsin(&instance, &mut rng));
}

#[test]
fn test_full_clause_set_is_unsatisfiable() {
    let clauses = (0..8).map(|bits: i32| {
        vec![
            if bits & 1 == 0 { 1 } else { -1 },
            if bits & 2 == 0 { 2 } else { -2 },
            if bits & 4 == 0 { 3 } else { -3 },
        ]
    });
    let instance = Instance::from_literals(clauses).unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    assert!(!solve_dantsin(&instance, &mut rng));
}

#[test]
fn test_terminal_cases() {
    let mut rng = StdRng::seed_from_u64(3);
    let empty = Instance::from_literals([]).unwrap();
    assert!(solve_dantsin(&empty, &mut rng));
    let conflict = Instance::from_literals([vec![]]).unwrap();
    assert!(!solve_dantsin(&conflict, &mut rng));
}

#[test]
fn test_sparse_variable_names_are_handled() {
    // Codeword bits map onto the sorted variables, whatever their names.
    let instance = Instance::from_literals([vec![7, 9], vec![-9, 11]]).unwrap();
    let mut rng = StdRng::seed_from_u64(4);
    assert!(solve_dantsin(&instance, &mut rng));
}
