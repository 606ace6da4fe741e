use super::*;

fn example() -> Instance {
    Instance::from_literals([vec![1, 2], vec![-2, 3], vec![-1, -3]]).unwrap()
}

#[test]
fn test_check_assignment() {
    let instance = example();
    assert!(instance.check_assignment(&Assignment::from([(1, true), (2, false), (3, false)])));
    assert!(!instance.check_assignment(&Assignment::from([(1, true), (2, true), (3, true)])));
}

#[test]
fn test_partial_assignment_never_satisfies_by_default() {
    let instance = example();
    assert!(!instance.check_assignment(&Assignment::new()));
    // x2 ↦ false satisfies the second clause only.
    assert_eq!(instance.count_satisfied(&Assignment::from([(2, false)])), 1);
}

#[test]
fn test_count_satisfied() {
    let instance = example();
    let assignment = Assignment::from([(1, true), (2, true), (3, true)]);
    assert_eq!(instance.count_satisfied(&assignment), 2);
}

#[test]
fn test_unsatisfied_clauses() {
    let instance = example();
    let assignment = Assignment::from([(1, true), (2, true), (3, true)]);
    let unsatisfied = instance.unsatisfied_clauses(&assignment);
    assert_eq!(unsatisfied, vec![&Clause::new(vec![-1, -3])]);
}

#[test]
fn test_empty_instance_is_satisfied() {
    let instance = Instance::from_literals([]).unwrap();
    assert!(instance.check_assignment(&Assignment::new()));
}

#[test]
fn test_empty_clause_is_never_satisfied() {
    let instance = Instance::from_literals([vec![]]).unwrap();
    assert!(!instance.check_assignment(&Assignment::from([(1, true)])));
}
