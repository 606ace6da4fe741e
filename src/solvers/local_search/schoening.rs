//! Schöning's probabilistic k-SAT algorithm.

use crate::instance::Instance;
use crate::registry::SolverEntry;
use crate::solvers::local_search::random_total_assignment;
use crate::solvers::SearchOutcome;
use rand::seq::IndexedRandom;
use rand::Rng;

inventory::submit! {
    SolverEntry {
        name: "schoening",
        family: "randomized",
        description: "Random restarts with n random-walk flips on unsatisfied clauses",
        instrumented: true,
    }
}

/// Decide satisfiability with Schöning's random walk.
///
/// Each try starts from a uniformly random total assignment and performs up
/// to `n` flips; every flip picks an unsatisfied clause uniformly, then one
/// of its variables uniformly. One try of a satisfiable k-SAT instance
/// succeeds with probability about `(2(1-1/k))^(-n)`, so
/// `⌈(-ln ε)·(2(1-1/k))^n⌉` tries bound the one-sided error by ε. A `true`
/// verdict is always correct. The reported iteration count is the number of
/// assignments checked.
///
/// References: Schöning: A probabilistic algorithm for k-SAT and constraint
/// satisfaction problems (1999); Schöning, p. 102 f.
pub fn solve_schoening<R: Rng>(instance: &Instance, error_rate: f64, rng: &mut R) -> SearchOutcome {
    if instance.is_empty() {
        return SearchOutcome::new(true, 0);
    }
    if instance.has_empty_clause() {
        return SearchOutcome::new(false, 0);
    }

    let k = instance
        .longest_clause_length()
        .expect("instance has at least one clause");
    let n = instance.num_variables();
    let escape_rate = 2.0 * (1.0 - 1.0 / k as f64);
    let tries = (-error_rate.ln() * escape_rate.powi(n as i32)).ceil() as u64;

    let variables: Vec<i32> = instance.all_variables().into_iter().collect();
    let mut iterations = 0;

    for _ in 0..tries {
        let mut assignment = random_total_assignment(&variables, rng);

        for _ in 0..n {
            iterations += 1;
            if instance.check_assignment(&assignment) {
                return SearchOutcome::new(true, iterations);
            }

            let unsatisfied = instance.unsatisfied_clauses(&assignment);
            let clause = *unsatisfied
                .choose(rng)
                .expect("unsatisfied instance has an unsatisfied clause");
            let literal = *clause
                .literals
                .choose(rng)
                .expect("clause has at least one literal");
            assignment.flip(literal.abs());
        }
    }

    SearchOutcome::new(false, iterations)
}

#[cfg(test)]
#[path = "../../unit_tests/solvers/local_search/schoening.rs"]
mod tests;
