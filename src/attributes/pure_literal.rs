//! Pure literal detection.

use crate::instance::Instance;
use std::collections::BTreeSet;

/// Find a pure literal: a variable occurring in only one polarity across all
/// clauses.
///
/// Variables are scanned in ascending order, checking the positive polarity
/// first. Returns the literal in the polarity it occurs in, or `None` when
/// every variable appears both ways.
pub fn pure_literal(instance: &Instance) -> Option<i32> {
    let found: BTreeSet<i32> = instance
        .clauses()
        .iter()
        .flat_map(|clause| clause.literals.iter().copied())
        .collect();

    for variable in instance.all_variables() {
        if found.contains(&variable) && !found.contains(&-variable) {
            return Some(variable);
        }
        if found.contains(&-variable) && !found.contains(&variable) {
            return Some(-variable);
        }
    }
    None
}

#[cfg(test)]
#[path = "../unit_tests/attributes/pure_literal.rs"]
mod tests;
