//! Polynomial 2-SAT decision via implication graphs.

use crate::error::{Result, SatError};
use crate::instance::Instance;
use crate::registry::SolverEntry;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::BTreeMap;

inventory::submit! {
    SolverEntry {
        name: "two_sat",
        family: "polynomial",
        description: "Implication graph with strongly connected components",
        instrumented: false,
    }
}

/// Decide a 2-SAT instance in polynomial time.
///
/// Builds the implication graph (for each clause `(a ∨ b)` the edges
/// `¬a → b` and `¬b → a`) and reports unsatisfiability exactly when some
/// strongly connected component contains a variable in both polarities.
///
/// Clauses with fewer than two literals are accepted: a unit clause `(a)`
/// becomes the implication `¬a → a`, and an empty clause makes the formula
/// unsatisfiable outright. Clauses with more than two literals are outside
/// this solver's domain and rejected with
/// [`SatError::UnsupportedInstance`].
///
/// References: Aspvall, Plass, Tarjan (1979); Schöning, p. 67 f.
pub fn solve_two_sat(instance: &Instance) -> Result<bool> {
    if instance.longest_clause_length() > Some(2) {
        return Err(SatError::UnsupportedInstance(
            "2-SAT solver requires clauses of at most two literals".into(),
        ));
    }
    if instance.has_empty_clause() {
        return Ok(false);
    }

    let mut graph: DiGraph<i32, ()> = DiGraph::new();
    let mut node_of: BTreeMap<i32, NodeIndex> = BTreeMap::new();
    for variable in instance.all_variables() {
        node_of.insert(variable, graph.add_node(variable));
        node_of.insert(-variable, graph.add_node(-variable));
    }

    for clause in instance.clauses() {
        let (a, b) = match clause.literals.as_slice() {
            [a, b] => (*a, *b),
            [a] => (*a, *a),
            _ => unreachable!("clause lengths checked above"),
        };
        graph.add_edge(node_of[&-a], node_of[&b], ());
        graph.add_edge(node_of[&-b], node_of[&a], ());
    }

    for component in tarjan_scc(&graph) {
        for &node in &component {
            let literal = graph[node];
            if component.iter().any(|&other| graph[other] == -literal) {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

#[cfg(test)]
#[path = "../unit_tests/solvers/two_sat.rs"]
mod tests;
