use super::*;
use crate::instance::Instance;

#[test]
fn test_chain_is_one_component() {
    // (x1 ∨ x2) ∧ (¬x2 ∨ x3) ∧ (x3 ∨ x4): clauses chained by x2 and x3.
    let instance =
        Instance::from_literals([vec![1, 2], vec![-2, 3], vec![3, 4]]).unwrap();
    let graph = clause_graph(&instance);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert!(is_one_connected_component(&instance));
}

#[test]
fn test_polarity_is_ignored() {
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    assert_eq!(clause_graph(&instance).edge_count(), 1);
    assert!(is_one_connected_component(&instance));
}

#[test]
fn test_disjoint_formulas_split() {
    let instance = Instance::from_literals([vec![1, 2], vec![3, 4]]).unwrap();
    assert!(!is_one_connected_component(&instance));
}

#[test]
fn test_empty_instance_has_no_component() {
    let instance = Instance::from_literals([]).unwrap();
    assert!(!is_one_connected_component(&instance));
}
