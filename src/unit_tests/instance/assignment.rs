use super::*;

#[test]
fn test_set_get_contains() {
    let mut assignment = Assignment::new();
    assert!(assignment.is_empty());
    assignment.set(3, true);
    assignment.set(1, false);
    assert_eq!(assignment.len(), 2);
    assert_eq!(assignment.get(3), Some(true));
    assert_eq!(assignment.get(1), Some(false));
    assert_eq!(assignment.get(2), None);
    assert!(assignment.contains(1));
    assert!(!assignment.contains(2));
}

#[test]
fn test_from_literal() {
    assert_eq!(Assignment::from_literal(5).get(5), Some(true));
    assert_eq!(Assignment::from_literal(-5).get(5), Some(false));
}

#[test]
fn test_flip() {
    let mut assignment = Assignment::from([(1, true)]);
    assignment.flip(1);
    assert_eq!(assignment.get(1), Some(false));
    assignment.flip(2); // unassigned: no effect
    assert!(!assignment.contains(2));
}

#[test]
fn test_satisfies_literal() {
    let assignment = Assignment::from([(1, true), (2, false)]);
    assert!(assignment.satisfies_literal(1));
    assert!(assignment.satisfies_literal(-2));
    assert!(!assignment.satisfies_literal(-1));
    assert!(!assignment.satisfies_literal(3));
}

#[test]
fn test_iteration_is_ordered() {
    let assignment = Assignment::from([(4, true), (1, false), (2, true)]);
    let variables: Vec<i32> = assignment.variables().collect();
    assert_eq!(variables, vec![1, 2, 4]);
    let true_literals: Vec<i32> = assignment.true_literals().collect();
    assert_eq!(true_literals, vec![-1, 2, 4]);
    let false_literals: Vec<i32> = assignment.false_literals().collect();
    assert_eq!(false_literals, vec![1, -2, -4]);
}

#[test]
fn test_constant_and_from_bits() {
    let all_false = Assignment::constant([1, 2, 3], false);
    assert_eq!(all_false.len(), 3);
    assert!(all_false.true_literals().all(|lit| lit < 0));

    let from_bits = Assignment::from_bits(&[1, 3, 5], &[true, false, true]);
    assert_eq!(from_bits.get(1), Some(true));
    assert_eq!(from_bits.get(3), Some(false));
    assert_eq!(from_bits.get(5), Some(true));
}
