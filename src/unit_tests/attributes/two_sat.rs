use super::*;
use crate::instance::Instance;

#[test]
fn test_two_sat_shape() {
    let instance = Instance::from_literals([vec![1, 2], vec![-1, 2]]).unwrap();
    assert!(is_two_sat(&instance));
}

#[test]
fn test_shorter_clauses_do_not_count() {
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    assert!(!is_two_sat(&instance));
    // A unit clause next to a 2-clause still counts: the longest is 2.
    let mixed = Instance::from_literals([vec![1], vec![1, 2]]).unwrap();
    assert!(is_two_sat(&mixed));
}

#[test]
fn test_longer_clauses_disqualify() {
    let instance = Instance::from_literals([vec![1, 2], vec![1, 2, 3]]).unwrap();
    assert!(!is_two_sat(&instance));
}

#[test]
fn test_empty_instance() {
    let instance = Instance::from_literals([]).unwrap();
    assert!(!is_two_sat(&instance));
}
