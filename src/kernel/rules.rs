//! Reduction rules for kernel normalization.
//!
//! Each rule inspects an instance and returns `Some(reduced)` when it fires,
//! `None` when it does not apply. Rules are satisfiability-preserving.

use crate::attributes::pure_literal;
use crate::instance::{Assignment, Clause, Instance};

/// Remove the first unit clause by assigning its literal true and
/// simplifying.
pub fn remove_unit_clause(instance: &Instance) -> Option<Instance> {
    let unit = instance.clauses().iter().find(|clause| clause.is_unit())?;
    let assignment = Assignment::from_literal(unit.literals[0]);
    Some(instance.assign_and_simplify(&assignment))
}

/// Remove clauses containing a literal together with its negation. Such
/// clauses are true under every assignment.
pub fn remove_tautological_clauses(instance: &Instance) -> Option<Instance> {
    let filtered: Vec<Clause> = instance
        .clauses()
        .iter()
        .filter(|clause| !clause.is_tautology())
        .cloned()
        .collect();
    if filtered.len() == instance.num_clauses() {
        return None;
    }
    Some(Instance::from_parts(filtered))
}

/// Remove duplicate clauses, then clauses that strictly contain another
/// clause (the smaller clause subsumes them).
pub fn remove_duplicate_and_superset_clauses(instance: &Instance) -> Option<Instance> {
    let mut unique: Vec<Clause> = Vec::new();
    for clause in instance.clauses() {
        if !unique.iter().any(|kept| kept.same_literals(clause)) {
            unique.push(clause.clone());
        }
    }

    let subsumed: Vec<Clause> = unique
        .iter()
        .filter(|clause| {
            !unique
                .iter()
                .any(|other| other.len() < clause.len() && other.subsumes(clause))
        })
        .cloned()
        .collect();

    if subsumed.len() == instance.num_clauses() {
        return None;
    }
    Some(Instance::from_parts(subsumed))
}

/// Assign the first pure literal its only polarity and simplify.
pub fn remove_pure_literal(instance: &Instance) -> Option<Instance> {
    let literal = pure_literal(instance)?;
    Some(instance.assign_and_simplify(&Assignment::from_literal(literal)))
}

/// Merge the first pair of twin clauses `D ∪ {l}` and `D ∪ {¬l}` into the
/// single resolvent `D` (Schöning's "2-Eige-Zwillinge"). The merged clause
/// replaces the first twin with its literals sorted ascending; the second
/// twin is dropped.
pub fn merge_twin_clauses(instance: &Instance) -> Option<Instance> {
    let clauses = instance.clauses();
    for i in 0..clauses.len() {
        for j in (i + 1)..clauses.len() {
            let Some(pivot) = twin_pivot(&clauses[i], &clauses[j]) else {
                continue;
            };
            let mut merged: Vec<i32> = clauses[i]
                .literals
                .iter()
                .copied()
                .filter(|&lit| lit != pivot)
                .collect();
            merged.sort_unstable();

            let mut result = Vec::with_capacity(clauses.len() - 1);
            for (index, clause) in clauses.iter().enumerate() {
                if index == i {
                    result.push(Clause::new(merged.clone()));
                } else if index != j {
                    result.push(clause.clone());
                }
            }
            return Some(Instance::from_parts(result));
        }
    }
    None
}

/// If the two clauses differ in exactly one complementary literal pair,
/// return the member of that pair contained in `first`.
fn twin_pivot(first: &Clause, second: &Clause) -> Option<i32> {
    let only_in_first: Vec<i32> = first
        .literals
        .iter()
        .copied()
        .filter(|&lit| !second.contains(lit))
        .collect();
    let only_in_second: Vec<i32> = second
        .literals
        .iter()
        .copied()
        .filter(|&lit| !first.contains(lit))
        .collect();

    match (only_in_first.as_slice(), only_in_second.as_slice()) {
        ([a], [b]) if *a == -*b => Some(*a),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../unit_tests/kernel/rules.rs"]
mod tests;
