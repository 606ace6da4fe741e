//! The Paturi–Pudlák–Zane randomized algorithm.

use crate::instance::{Assignment, Instance};
use crate::registry::SolverEntry;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::RngExt;

inventory::submit! {
    SolverEntry {
        name: "ppz",
        family: "randomized",
        description: "Paturi–Pudlák–Zane: random variable permutations with unit-clause propagation",
        instrumented: false,
    }
}

/// Decide satisfiability with the Paturi–Pudlák–Zane algorithm.
///
/// Each iteration draws a uniformly random permutation of the variables and
/// assigns them in that order: a variable occurring in a unit clause of the
/// progressively simplified instance is assigned accordingly, any other
/// uniformly at random. An iteration ending without an empty clause found a
/// satisfying assignment.
///
/// For a k-SAT instance with n variables one iteration succeeds with
/// probability at least `p = 2^(-n(1-1/k))`; running `⌈(-ln ε)/p⌉`
/// iterations bounds the one-sided error by ε. A `true` verdict is always
/// correct.
///
/// References: Paturi, Pudlák, Zane: An improved exponential-time algorithm
/// for k-SAT (2005); Schöning, p. 84 f.
pub fn solve_ppz<R: Rng>(instance: &Instance, error_rate: f64, rng: &mut R) -> bool {
    if instance.is_empty() {
        return true;
    }
    if instance.has_empty_clause() {
        return false;
    }

    let k = instance
        .longest_clause_length()
        .expect("instance has at least one clause");
    let n = instance.num_variables();
    let success_probability = 2f64.powf(-(n as f64) * (1.0 - 1.0 / k as f64));
    let iterations = (-error_rate.ln() / success_probability).ceil() as u64;

    let mut variables: Vec<i32> = instance.all_variables().into_iter().collect();

    for _ in 0..iterations {
        variables.shuffle(rng);

        let mut current = instance.clone();
        for &variable in &variables {
            let value = if has_unit_clause(&current, variable) {
                true
            } else if has_unit_clause(&current, -variable) {
                false
            } else {
                rng.random_bool(0.5)
            };
            let mut assignment = Assignment::new();
            assignment.set(variable, value);
            current = current.assign_and_simplify(&assignment);
        }

        if !current.has_empty_clause() {
            return true;
        }
    }
    false
}

fn has_unit_clause(instance: &Instance, literal: i32) -> bool {
    instance
        .clauses()
        .iter()
        .any(|clause| clause.is_unit() && clause.literals[0] == literal)
}

#[cfg(test)]
#[path = "../unit_tests/solvers/ppz.rs"]
mod tests;
