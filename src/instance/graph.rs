//! The clause-adjacency graph.
//!
//! One node per clause; an edge joins two clauses iff they share at least
//! one variable, irrespective of polarity. A formula whose graph splits into
//! several components decomposes into independent sub-formulas.
//!
//! ```text
//! (x1 ∨ x2) ∧ (¬x2 ∨ x3) ∧ (x3 ∨ x4)
//! ===
//! (A) --- (B) --- (C)
//! ```

use crate::instance::Instance;
use petgraph::algo::connected_components;
use petgraph::graph::UnGraph;
use std::collections::BTreeSet;

/// Build the clause-adjacency graph. Node `i` is clause `i` of the instance.
pub fn clause_graph(instance: &Instance) -> UnGraph<(), ()> {
    let mut graph = UnGraph::new_undirected();
    let nodes: Vec<_> = (0..instance.num_clauses())
        .map(|_| graph.add_node(()))
        .collect();

    let variable_sets: Vec<BTreeSet<i32>> = instance
        .clauses()
        .iter()
        .map(|clause| clause.variables().collect())
        .collect();

    for i in 0..instance.num_clauses() {
        for j in (i + 1)..instance.num_clauses() {
            if !variable_sets[i].is_disjoint(&variable_sets[j]) {
                graph.add_edge(nodes[i], nodes[j], ());
            }
        }
    }
    graph
}

/// Whether the clause-adjacency graph has exactly one connected component.
///
/// The empty instance has zero components and therefore returns false.
pub fn is_one_connected_component(instance: &Instance) -> bool {
    connected_components(&clause_graph(instance)) == 1
}

#[cfg(test)]
#[path = "../unit_tests/instance/graph.rs"]
mod tests;
