use super::*;
use crate::instance::Instance;

#[test]
fn test_frequent_variable_may_make_unsatisfiable() {
    // Shortest clause length 2; x1 occurs three times.
    let instance =
        Instance::from_literals([vec![1, 2], vec![-1, 3], vec![1, 4]]).unwrap();
    assert!(is_tovey_satisfied(&instance));
}

#[test]
fn test_rare_variables_are_trivially_satisfiable() {
    // Every variable occurs at most twice, the shortest clause has 3 literals.
    let instance =
        Instance::from_literals([vec![1, 2, 3], vec![-1, -2, 4]]).unwrap();
    assert!(!is_tovey_satisfied(&instance));
}

#[test]
fn test_occurrences_count_both_polarities() {
    // x1 occurs twice (once per polarity), shortest clause length 1.
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    assert!(is_tovey_satisfied(&instance));
}

#[test]
fn test_empty_instance() {
    let instance = Instance::from_literals([]).unwrap();
    assert!(!is_tovey_satisfied(&instance));
}
