use super::*;
use crate::instance::Instance;

#[test]
fn test_positive_pure_literal() {
    // x2 occurs only positively; x1 occurs both ways.
    let instance = Instance::from_literals([vec![1, 2], vec![-1, 2]]).unwrap();
    assert_eq!(pure_literal(&instance), Some(2));
}

#[test]
fn test_negative_pure_literal() {
    let instance = Instance::from_literals([vec![-1, 2], vec![-1, -2]]).unwrap();
    assert_eq!(pure_literal(&instance), Some(-1));
}

#[test]
fn test_smallest_variable_wins() {
    // Both x2 and x3 are pure; the scan is ascending.
    let instance = Instance::from_literals([vec![1, 2, 3], vec![-1, 2, 3]]).unwrap();
    assert_eq!(pure_literal(&instance), Some(2));
}

#[test]
fn test_last_variable_is_considered() {
    let instance = Instance::from_literals([vec![1, -2], vec![-1, -2]]).unwrap();
    assert_eq!(pure_literal(&instance), Some(-2));
}

#[test]
fn test_no_pure_literal() {
    let instance =
        Instance::from_literals([vec![1, 2], vec![-1, -2]]).unwrap();
    assert_eq!(pure_literal(&instance), None);
}

#[test]
fn test_empty_instance() {
    let instance = Instance::from_literals([]).unwrap();
    assert_eq!(pure_literal(&instance), None);
}
