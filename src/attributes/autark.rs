//! Autark (self-sufficient) assignments.

use crate::instance::{Assignment, Instance};

/// Check whether a partial assignment is autark.
///
/// An assignment is autark when every clause it touches (every clause
/// mentioning an assigned variable) is satisfied by it. Applying an autark
/// assignment is satisfiability-preserving, so splitting algorithms may
/// commit to one without branching.
///
/// Reference: Schöning, p. 81 f.
pub fn is_autark(instance: &Instance, assignment: &Assignment) -> bool {
    instance.clauses().iter().all(|clause| {
        let touched = clause
            .literals
            .iter()
            .any(|&lit| assignment.contains(lit.abs()));
        !touched || clause.is_satisfied(assignment)
    })
}

#[cfg(test)]
#[path = "../unit_tests/attributes/autark.rs"]
mod tests;
