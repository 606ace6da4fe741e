use super::*;

fn example() -> Instance {
    Instance::from_literals([vec![1, 2], vec![-1, 3], vec![-2, -3]]).unwrap()
}

#[test]
fn test_satisfied_clauses_are_removed() {
    let simplified = example().assign_and_simplify(&Assignment::from([(1, true)]));
    // (x1 ∨ x2) disappears, ¬x1 is stripped from the second clause.
    assert_eq!(
        simplified,
        Instance::from_literals([vec![3], vec![-2, -3]]).unwrap()
    );
}

#[test]
fn test_unassigned_variables_are_preserved() {
    let simplified = example().assign_and_simplify(&Assignment::from([(3, false)]));
    assert_eq!(
        simplified,
        Instance::from_literals([vec![1, 2], vec![-1]]).unwrap()
    );
}

#[test]
fn test_clause_can_collapse_to_empty() {
    let instance = Instance::from_literals([vec![1]]).unwrap();
    let simplified = instance.assign_and_simplify(&Assignment::from([(1, false)]));
    assert!(simplified.has_empty_clause());
}

#[test]
fn test_empty_assignment_is_identity() {
    let instance = example();
    assert_eq!(instance.assign_and_simplify(&Assignment::new()), instance);
}

#[test]
fn test_total_assignment_decides() {
    let satisfying = Assignment::from([(1, true), (2, false), (3, true)]);
    assert!(example().assign_and_simplify(&satisfying).is_empty());

    let falsifying = Assignment::from([(1, true), (2, true), (3, true)]);
    assert!(example()
        .assign_and_simplify(&falsifying)
        .has_empty_clause());
}

#[test]
fn test_provenance_tracks_original_positions() {
    let instance = example();
    let parents: Vec<usize> = (0..instance.num_clauses()).collect();
    let (simplified, surviving) = instance
        .assign_and_simplify_with_provenance(&Assignment::from([(1, true)]), &parents);
    // Clause 0 was satisfied; clauses 1 and 2 survive in reduced form.
    assert_eq!(surviving, vec![1, 2]);
    assert_eq!(
        simplified,
        Instance::from_literals([vec![3], vec![-2, -3]]).unwrap()
    );
}

#[test]
fn test_provenance_composes() {
    let instance = example();
    let parents: Vec<usize> = (0..instance.num_clauses()).collect();
    let (step1, parents1) =
        instance.assign_and_simplify_with_provenance(&Assignment::from([(2, false)]), &parents);
    let (_, parents2) =
        step1.assign_and_simplify_with_provenance(&Assignment::from([(1, false)]), &parents1);
    // {x2 ↦ false} removes clause 2; {x1 ↦ false} then removes clause 1.
    assert_eq!(parents2, vec![0]);
}
