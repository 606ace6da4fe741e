//! The renamable Horn property.

use crate::instance::{Clause, Instance};
use crate::solvers::solve_two_sat;

/// Check whether the formula can be turned into a Horn formula (at most one
/// positive literal per clause) by flipping the polarity of some variables.
///
/// Builds the auxiliary 2-CNF formula F* containing one clause `(a ∨ b)` for
/// every unordered pair of distinct literals co-occurring in some original
/// clause, in first-insertion order, and decides it with the 2-SAT solver.
/// F* is satisfiable iff a renaming exists, in which case satisfiability of
/// the original formula is decidable in polynomial time.
///
/// Reference: Schöning, p. 73 f.
pub fn is_renamable_horn(instance: &Instance) -> bool {
    let mut pairs: Vec<(i32, i32)> = Vec::new();
    for clause in instance.clauses() {
        for (position, &a) in clause.literals.iter().enumerate() {
            for &b in &clause.literals[position + 1..] {
                if !pairs.contains(&(a, b)) && !pairs.contains(&(b, a)) {
                    pairs.push((a, b));
                }
            }
        }
    }

    let check_instance = Instance::from_parts(
        pairs
            .into_iter()
            .map(|(a, b)| Clause::new(vec![a, b]))
            .collect(),
    );

    // F* has only binary clauses, so the solver cannot reject it.
    solve_two_sat(&check_instance).unwrap_or(false)
}

#[cfg(test)]
#[path = "../unit_tests/attributes/renamable_horn.rs"]
mod tests;
