//! GSAT: greedy local search.
//!
//! Reference: Selman, Levesque, Mitchell: A new method for solving hard
//! satisfiability problems (1992).

use crate::instance::{Assignment, Instance};
use crate::registry::SolverEntry;
use crate::solvers::local_search::random_total_assignment;
use crate::solvers::SearchOutcome;
use rand::seq::IndexedRandom;
use rand::Rng;

inventory::submit! {
    SolverEntry {
        name: "gsat",
        family: "local_search",
        description: "Greedy flips maximizing the number of satisfied clauses, with random restarts",
        instrumented: true,
    }
}

/// Among the candidate variables, pick one whose flip maximizes the number
/// of satisfied clauses; ties are broken uniformly at random.
pub(crate) fn best_flip<R: Rng>(
    instance: &Instance,
    assignment: &Assignment,
    candidates: &[i32],
    rng: &mut R,
) -> i32 {
    debug_assert!(!candidates.is_empty());
    let mut best_score = 0;
    let mut best_variables: Vec<i32> = Vec::new();

    for &variable in candidates {
        let mut flipped = assignment.clone();
        flipped.flip(variable);
        let score = instance.count_satisfied(&flipped);
        if best_variables.is_empty() || score > best_score {
            best_score = score;
            best_variables = vec![variable];
        } else if score == best_score {
            best_variables.push(variable);
        }
    }

    *best_variables
        .choose(rng)
        .expect("at least one candidate was scored")
}

/// Decide satisfiability with GSAT.
///
/// Each of the `max_tries` restarts draws a uniformly random total
/// assignment and performs up to `2n` greedy flips, each picked by
/// [`best_flip`] over all variables. The reported iteration count is the
/// number of assignments checked for satisfaction. One-sided: a `true`
/// verdict is always correct.
pub fn solve_gsat<R: Rng>(instance: &Instance, max_tries: usize, rng: &mut R) -> SearchOutcome {
    if instance.is_empty() {
        return SearchOutcome::new(true, 0);
    }
    if instance.has_empty_clause() {
        return SearchOutcome::new(false, 0);
    }

    let variables: Vec<i32> = instance.all_variables().into_iter().collect();
    let max_flips = 2 * variables.len();
    let mut iterations = 0;

    for _ in 0..max_tries {
        let mut assignment = random_total_assignment(&variables, rng);

        for _ in 0..max_flips {
            iterations += 1;
            if instance.check_assignment(&assignment) {
                return SearchOutcome::new(true, iterations);
            }
            let variable = best_flip(instance, &assignment, &variables, rng);
            assignment.flip(variable);
        }
    }

    SearchOutcome::new(false, iterations)
}

#[cfg(test)]
#[path = "../../unit_tests/solvers/local_search/gsat.rs"]
mod tests;
