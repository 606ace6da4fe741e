use super::*;
use crate::instance::Assignment;

#[test]
fn test_clause_basics() {
    let clause = Clause::new(vec![1, -2, 3]);
    assert_eq!(clause.len(), 3);
    assert!(!clause.is_empty());
    assert!(!clause.is_unit());
    assert!(clause.contains(-2));
    assert!(!clause.contains(2));
    assert_eq!(clause.variables().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_empty_and_unit() {
    assert!(Clause::new(vec![]).is_empty());
    assert!(Clause::new(vec![-4]).is_unit());
}

#[test]
fn test_tautology() {
    assert!(Clause::new(vec![1, -1]).is_tautology());
    assert!(Clause::new(vec![2, -3, 3]).is_tautology());
    assert!(!Clause::new(vec![1, 2, 3]).is_tautology());
}

#[test]
fn test_mentions_variable() {
    let clause = Clause::new(vec![1, -2]);
    assert!(clause.mentions_variable(1));
    assert!(clause.mentions_variable(2));
    assert!(!clause.mentions_variable(3));
}

#[test]
fn test_is_satisfied() {
    let clause = Clause::new(vec![1, -2]);
    assert!(clause.is_satisfied(&Assignment::from([(1, true)])));
    assert!(clause.is_satisfied(&Assignment::from([(2, false)])));
    assert!(!clause.is_satisfied(&Assignment::from([(1, false)])));
    // Unassigned variables never satisfy a literal.
    assert!(!clause.is_satisfied(&Assignment::new()));
}

#[test]
fn test_satisfied_behind_unassigned_literal() {
    // The satisfying literal is examined even when an earlier one is
    // unassigned.
    let clause = Clause::new(vec![1, 2]);
    assert!(clause.is_satisfied(&Assignment::from([(2, true)])));
}

#[test]
fn test_same_literals_ignores_order() {
    let clause = Clause::new(vec![1, -2, 3]);
    assert!(clause.same_literals(&Clause::new(vec![3, 1, -2])));
    assert!(!clause.same_literals(&Clause::new(vec![1, 2, 3])));
    assert!(!clause.same_literals(&Clause::new(vec![1, -2])));
}

#[test]
fn test_subsumes() {
    let small = Clause::new(vec![1, 2]);
    let big = Clause::new(vec![2, 3, 1]);
    assert!(small.subsumes(&big));
    assert!(!big.subsumes(&small));
}
