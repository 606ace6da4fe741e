use super::*;
use crate::instance::{Assignment, Instance};

fn example() -> Instance {
    Instance::from_literals([vec![1, 2], vec![-1, 3], vec![4, 5]]).unwrap()
}

#[test]
fn test_autark_assignment() {
    // {x2 ↦ true, x3 ↦ true} touches the first two clauses and satisfies both.
    let assignment = Assignment::from([(2, true), (3, true)]);
    assert!(is_autark(&example(), &assignment));
}

#[test]
fn test_touched_but_unsatisfied_clause() {
    // {x1 ↦ true} touches (¬x1 ∨ x3) without satisfying it.
    let assignment = Assignment::from([(1, true)]);
    assert!(!is_autark(&example(), &assignment));
}

#[test]
fn test_untouched_clauses_are_ignored() {
    // (x4 ∨ x5) mentions no assigned variable and does not matter.
    let assignment = Assignment::from([(1, false), (2, true)]);
    assert!(is_autark(&example(), &assignment));
}

#[test]
fn test_empty_assignment_is_autark() {
    assert!(is_autark(&example(), &Assignment::new()));
}
