//! Branching heuristics for the DPLL family.
//!
//! Each heuristic maps an instance to a single literal. The solver will
//! first try to make that literal true, then the opposite:
//!
//! - returning `3` tries `x3 := true` first, then `x3 := false`;
//! - returning `-4` tries `x4 := false` first, then `x4 := true`.
//!
//! Ties are broken deterministically towards the smallest variable index,
//! preferring the positive polarity. The exception is RDLCS, which picks the
//! polarity of the chosen variable from an injected PRNG. Every heuristic expects an
//! instance with at least one non-empty clause; the solvers guarantee this
//! by handling terminal cases first.
//!
//! Reference: Schöning, p. 80 f.

use crate::instance::Instance;
use ordered_float::OrderedFloat;
use rand::Rng;
use rand::RngExt;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Occurrence count per literal.
fn literal_counts(instance: &Instance) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for clause in instance.clauses() {
        for &lit in &clause.literals {
            *counts.entry(lit).or_insert(0) += 1;
        }
    }
    counts
}

/// Among literals sharing the best score, the smallest variable wins and the
/// positive polarity is preferred.
fn break_tie(candidates: impl IntoIterator<Item = i32>) -> i32 {
    candidates
        .into_iter()
        .min_by_key(|&lit| (lit.abs(), lit < 0))
        .expect("tie-break over empty candidate set")
}

/// Dynamic Largest Individual Sum: the literal with the most occurrences.
pub fn dlis(instance: &Instance) -> i32 {
    let counts = literal_counts(instance);
    let best = counts.values().copied().max().unwrap_or(0);
    break_tie(
        counts
            .iter()
            .filter(|&(_, &count)| count == best)
            .map(|(&lit, _)| lit),
    )
}

/// Dynamic Largest Clause Sum: the variable with the most occurrences over
/// both polarities, returned in its more frequent polarity.
pub fn dlcs(instance: &Instance) -> i32 {
    let counts = literal_counts(instance);
    let occurrences =
        |lit: i32| -> usize { counts.get(&lit).copied().unwrap_or(0) };

    let variable = instance
        .all_variables()
        .into_iter()
        .max_by_key(|&v| (occurrences(v) + occurrences(-v), Reverse(v)))
        .expect("instance has at least one variable");

    if occurrences(variable) >= occurrences(-variable) {
        variable
    } else {
        -variable
    }
}

/// Random DLCS: variable selection as in [`dlcs`], polarity drawn uniformly
/// from the given PRNG.
pub fn rdlcs<R: Rng>(rng: &mut R) -> impl FnMut(&Instance) -> i32 + '_ {
    move |instance| {
        let variable = dlcs(instance).abs();
        if rng.random_bool(0.5) {
            variable
        } else {
            -variable
        }
    }
}

/// Maximum Occurrences in clauses of Minimum size: among the variables most
/// frequent in the shortest clauses, pick the one whose positive and
/// negative occurrence counts are most balanced. Always returns the positive
/// literal.
pub fn mom(instance: &Instance) -> i32 {
    let k = instance
        .shortest_clause_length()
        .expect("instance has at least one clause");
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for clause in instance.clauses().iter().filter(|clause| clause.len() == k) {
        for &lit in &clause.literals {
            *counts.entry(lit).or_insert(0) += 1;
        }
    }
    let occurrences =
        |lit: i32| -> usize { counts.get(&lit).copied().unwrap_or(0) };

    let variables = instance.all_variables();
    let best = variables
        .iter()
        .map(|&v| occurrences(v) + occurrences(-v))
        .max()
        .expect("instance has at least one variable");

    variables
        .into_iter()
        .filter(|&v| occurrences(v) + occurrences(-v) == best)
        .max_by_key(|&v| (occurrences(v) * occurrences(-v), Reverse(v)))
        .expect("candidate set is non-empty")
}

/// Score each literal by `Σ 2^(-|c|)` over the clauses containing it.
fn jeroslaw_wang_scores(instance: &Instance) -> BTreeMap<i32, f64> {
    let mut scores = BTreeMap::new();
    for clause in instance.clauses() {
        let weight = 2f64.powi(-(clause.len() as i32));
        for &lit in &clause.literals {
            *scores.entry(lit).or_insert(0.0) += weight;
        }
    }
    scores
}

/// Jeroslaw–Wang: the literal with the highest `Σ 2^(-|c|)` score.
pub fn jeroslaw_wang(instance: &Instance) -> i32 {
    let scores = jeroslaw_wang_scores(instance);
    let best = scores
        .values()
        .copied()
        .map(OrderedFloat)
        .max()
        .expect("instance has at least one literal");
    break_tie(
        scores
            .iter()
            .filter(|&(_, &score)| OrderedFloat(score) == best)
            .map(|(&lit, _)| lit),
    )
}

/// Two-sided Jeroslaw–Wang: the variable with the highest combined score of
/// both polarities, returned in the polarity scoring higher.
pub fn jeroslaw_wang_two_sided(instance: &Instance) -> i32 {
    let scores = jeroslaw_wang_scores(instance);
    let score = |lit: i32| -> f64 { scores.get(&lit).copied().unwrap_or(0.0) };

    let variable = instance
        .all_variables()
        .into_iter()
        .max_by_key(|&v| (OrderedFloat(score(v) + score(-v)), Reverse(v)))
        .expect("instance has at least one variable");

    if score(variable) >= score(-variable) {
        variable
    } else {
        -variable
    }
}

/// The first literal of the first shortest clause.
pub fn shortest_clause(instance: &Instance) -> i32 {
    let k = instance
        .shortest_clause_length()
        .expect("instance has at least one clause");
    instance
        .clauses()
        .iter()
        .find(|clause| clause.len() == k)
        .expect("some clause has the minimum length")
        .literals[0]
}

#[cfg(test)]
#[path = "../../unit_tests/solvers/dpll/heuristics.rs"]
mod tests;
