use super::*;
use crate::instance::Instance;

fn full_clause_set() -> Instance {
    // All 8 clauses over 3 variables; unsatisfiable.
    let clauses = (0..8).map(|bits: i32| {
        vec![
            if bits & 1 == 0 { 1 } else { -1 },
            if bits & 2 == 0 { 2 } else { -2 },
            if bits & 4 == 0 { 3 } else { -3 },
        ]
    });
    Instance::from_literals(clauses).unwrap()
}

#[test]
fn test_step_applies_first_firing_rule() {
    // Unit clauses come before tautologies.
    let instance = Instance::from_literals([vec![2, -2], vec![1]]).unwrap();
    let reduced = kernel_step(&instance).unwrap();
    assert_eq!(reduced, Instance::from_literals([vec![2, -2]]).unwrap());
}

#[test]
fn test_step_reports_stability() {
    let instance = Instance::from_literals([vec![1, 2], vec![-1, -2]]).unwrap();
    assert!(kernel_step(&instance).is_none());
}

#[test]
fn test_unsatisfiable_unit_pair_normalizes_to_empty_clause() {
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    let kernel = normalize_to_kernel(&instance);
    assert!(kernel.has_empty_clause());
    assert_eq!(classify_kernel(&kernel), KernelVerdict::EmptyClause);
}

#[test]
fn test_tautology_normalizes_to_empty_instance() {
    let instance = Instance::from_literals([vec![1, -1]]).unwrap();
    let kernel = normalize_to_kernel(&instance);
    assert!(kernel.is_empty());
}

#[test]
fn test_normalize_is_idempotent() {
    let instance = Instance::from_literals([
        vec![1],
        vec![1, 2],
        vec![2, -2],
        vec![3, 4],
        vec![3, -4],
    ])
    .unwrap();
    let once = normalize_to_kernel(&instance);
    assert_eq!(normalize_to_kernel(&once), once);
}

#[test]
fn test_full_clause_set_is_reducible_by_twins() {
    assert_eq!(classify_kernel(&full_clause_set()), KernelVerdict::Reducible);
}

#[test]
fn test_empty_instance_is_trivially_satisfiable() {
    let instance = Instance::from_literals([]).unwrap();
    assert_eq!(
        classify_kernel(&instance),
        KernelVerdict::TriviallySatisfiableLll
    );
    assert!(!is_kernel_instance(&instance));
}

#[test]
fn test_sparse_instance_hits_the_lll() {
    // Stable, uniform width 3, every clause with a single neighbour < 2^(3-2).
    let instance = Instance::from_literals([
        vec![1, 2, 3],
        vec![-1, -2, -3],
        vec![4, 5, 6],
        vec![-4, -5, -6],
    ])
    .unwrap();
    assert_eq!(
        classify_kernel(&instance),
        KernelVerdict::TriviallySatisfiableLll
    );
}

#[test]
fn test_splittable_instance() {
    // Two variable-disjoint copies of a stable, Biathlet-saturated 2-CNF.
    let instance = Instance::from_literals([
        vec![1, 2],
        vec![-1, 3],
        vec![-2, -3],
        vec![1, -3],
        vec![4, 5],
        vec![-4, 6],
        vec![-5, -6],
        vec![4, -6],
    ])
    .unwrap();
    assert_eq!(classify_kernel(&instance), KernelVerdict::Splittable);
}

#[test]
fn test_two_sat_classification() {
    let instance = Instance::from_literals([
        vec![1, 2],
        vec![-1, 3],
        vec![-2, -3],
        vec![1, -3],
    ])
    .unwrap();
    assert_eq!(classify_kernel(&instance), KernelVerdict::TwoSat);
}

#[test]
fn test_non_uniform_lengths_skip_the_lll() {
    // Mixed clause widths: the LLL is undefined, Biathlet decides instead.
    let instance =
        Instance::from_literals([vec![1, 2], vec![-1, 2, 3], vec![-2, -3, 1]]).unwrap();
    assert_eq!(
        classify_kernel(&instance),
        KernelVerdict::TriviallySatisfiableBiathlet
    );
}
