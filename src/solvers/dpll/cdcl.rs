//! Conflict-driven clause learning with non-chronological backtracking.
//!
//! The solver keeps one *global clause store* that only grows: the input
//! clauses followed by every learned clause, each at a stable index. Search
//! nodes carry the reduced instance together with a mapping from its clause
//! positions back to store indices, so a conflict can be traced to the
//! original clause that collapsed to the empty clause.
//!
//! Conflict analysis resolves backwards along the trail until exactly one
//! literal of the current decision level remains (the first unique
//! implication point), learns the negation of the resulting cut, and
//! backtracks to the second-highest decision level among the learned
//! literals.
//!
//! Reference: Marques-Silva, Sakallah: GRASP, a search algorithm for
//! propositional satisfiability (1999).

use crate::attributes::pure_literal;
use crate::instance::{Assignment, Clause, Instance};
use crate::registry::SolverEntry;
use crate::solvers::SearchOutcome;
use std::collections::BTreeMap;

inventory::submit! {
    SolverEntry {
        name: "cdcl",
        family: "dpll",
        description: "CDCL with 1-UIP clause learning and non-chronological backtracking",
        instrumented: true,
    }
}

/// A search node of the CDCL stack.
#[derive(Debug, Clone)]
struct CdclNode {
    /// The instance reduced under the node's trail.
    instance: Instance,
    /// Assigned literals in assignment order.
    trail: Vec<i32>,
    /// Decision level at which each assigned variable was set.
    levels: BTreeMap<i32, usize>,
    /// For propagated variables, the store index of the clause that forced
    /// them; `None` for decisions and pure-literal assignments.
    antecedents: BTreeMap<i32, Option<usize>>,
    /// For each clause position of `instance`, its index in the global store.
    store_indices: Vec<usize>,
}

impl CdclNode {
    fn assign(
        &self,
        literal: i32,
        level: usize,
        antecedent: Option<usize>,
    ) -> CdclNode {
        let (instance, store_indices) = self.instance.assign_and_simplify_with_provenance(
            &Assignment::from_literal(literal),
            &self.store_indices,
        );
        let mut trail = self.trail.clone();
        trail.push(literal);
        let mut levels = self.levels.clone();
        levels.insert(literal.abs(), level);
        let mut antecedents = self.antecedents.clone();
        antecedents.insert(literal.abs(), antecedent);
        CdclNode {
            instance,
            trail,
            levels,
            antecedents,
            store_indices,
        }
    }
}

/// Decide satisfiability with conflict-driven clause learning.
///
/// Propagated and pure-literal assignments inherit the current decision
/// level; each heuristic decision increments it. The reported iteration
/// count is the number of nodes popped off the stack.
pub fn solve_cdcl<H>(instance: &Instance, mut heuristic: H) -> SearchOutcome
where
    H: FnMut(&Instance) -> i32,
{
    let mut store: Vec<Clause> = instance.clauses().to_vec();
    let mut decision_level: usize = 0;
    let mut iterations = 0;

    let mut stack = vec![CdclNode {
        instance: instance.clone(),
        trail: Vec::new(),
        levels: BTreeMap::new(),
        antecedents: BTreeMap::new(),
        store_indices: (0..store.len()).collect(),
    }];

    while let Some(node) = stack.pop() {
        iterations += 1;

        if node.instance.is_empty() {
            return SearchOutcome::new(true, iterations);
        }

        if node.instance.has_empty_clause() {
            if decision_level == 0 {
                return SearchOutcome::new(false, iterations);
            }

            let learned = analyze_conflict(&node, &store, decision_level);
            store.push(learned.clone());
            let learned_index = store.len() - 1;

            // Every live node receives the learned clause in the form its
            // trail reduces it to; nodes already satisfying it are skipped.
            for other in &mut stack {
                if learned
                    .literals
                    .iter()
                    .any(|lit| other.trail.contains(lit))
                {
                    continue;
                }
                let reduced: Vec<i32> = learned
                    .literals
                    .iter()
                    .copied()
                    .filter(|lit| !other.trail.contains(&-lit))
                    .collect();
                other.instance = other.instance.with_clause(Clause::new(reduced));
                other.store_indices.push(learned_index);
            }

            let backtrack_level = backtrack_level(&node, &learned);
            stack.retain(|other| other.levels.values().all(|&level| level <= backtrack_level));
            stack.push(rebuild_node(&node, &store, backtrack_level));
            decision_level = backtrack_level;
            continue;
        }

        // Unit propagation; the forcing clause becomes the antecedent.
        if let Some(position) = node
            .instance
            .clauses()
            .iter()
            .position(|clause| clause.is_unit())
        {
            let literal = node.instance.clauses()[position].literals[0];
            let antecedent = node.store_indices[position];
            stack.push(node.assign(literal, decision_level, Some(antecedent)));
            continue;
        }

        // Pure literals are committed without an antecedent.
        if let Some(literal) = pure_literal(&node.instance) {
            stack.push(node.assign(literal, decision_level, None));
            continue;
        }

        // Decision: both branches pushed, the heuristic's preference on top.
        decision_level += 1;
        let literal = heuristic(&node.instance);
        for branch in [-literal, literal] {
            stack.push(node.assign(branch, decision_level, None));
        }
    }

    SearchOutcome::new(false, iterations)
}

/// Resolve backwards from the conflict to the first unique implication
/// point and return the learned clause.
fn analyze_conflict(node: &CdclNode, store: &[Clause], decision_level: usize) -> Clause {
    let conflict_position = node
        .instance
        .clauses()
        .iter()
        .position(|clause| clause.is_empty())
        .expect("conflict analysis requires an empty clause");
    let conflict_clause = &store[node.store_indices[conflict_position]];

    let level_of = |literal: i32| -> usize {
        node.levels.get(&literal.abs()).copied().unwrap_or(0)
    };

    // The cut starts as the negated conflict clause; insertion order is kept
    // so the learned clause is deterministic.
    let mut cut: Vec<i32> = Vec::new();
    for &lit in &conflict_clause.literals {
        if !cut.contains(&-lit) {
            cut.push(-lit);
        }
    }

    let mut trail = node.trail.clone();
    while cut
        .iter()
        .filter(|&&lit| level_of(lit) == decision_level)
        .count()
        > 1
    {
        let Some(literal) = trail.pop() else {
            break;
        };
        let Some(position) = cut.iter().position(|&lit| lit == literal) else {
            continue;
        };
        cut.remove(position);

        // Replace the literal by the remaining literals of its antecedent,
        // negated. Propagated literals always have one.
        let antecedent = node
            .antecedents
            .get(&literal.abs())
            .copied()
            .flatten()
            .expect("literal in the cut was propagated and has an antecedent");
        for &lit in &store[antecedent].literals {
            if lit != literal && !cut.contains(&-lit) {
                cut.push(-lit);
            }
        }
    }

    Clause::new(cut.into_iter().map(|lit| -lit).collect())
}

/// Level to jump back to: 0 for a unit learned clause, otherwise the
/// second-highest decision level among its literals.
fn backtrack_level(node: &CdclNode, learned: &Clause) -> usize {
    if learned.is_unit() {
        return 0;
    }
    let mut levels: Vec<usize> = learned
        .literals
        .iter()
        .map(|lit| node.levels.get(&lit.abs()).copied().unwrap_or(0))
        .collect();
    levels.sort_unstable();
    levels[levels.len() - 2]
}

/// Recreate the conflicting node at the backtrack level: truncate its trail
/// and replay the remainder against the full (augmented) clause store.
fn rebuild_node(node: &CdclNode, store: &[Clause], backtrack_level: usize) -> CdclNode {
    let mut trail = node.trail.clone();
    let mut levels = node.levels.clone();
    let mut antecedents = node.antecedents.clone();
    while let Some(&literal) = trail.last() {
        if levels.get(&literal.abs()).copied().unwrap_or(0) <= backtrack_level {
            break;
        }
        trail.pop();
        levels.remove(&literal.abs());
        antecedents.remove(&literal.abs());
    }

    let mut instance = Instance::from_parts(store.to_vec());
    let mut store_indices: Vec<usize> = (0..store.len()).collect();
    for &literal in &trail {
        let (reduced, surviving) = instance.assign_and_simplify_with_provenance(
            &Assignment::from_literal(literal),
            &store_indices,
        );
        instance = reduced;
        store_indices = surviving;
    }

    CdclNode {
        instance,
        trail,
        levels,
        antecedents,
        store_indices,
    }
}

#[cfg(test)]
#[path = "../../unit_tests/solvers/dpll/cdcl.rs"]
mod tests;
