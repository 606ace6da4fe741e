//! GSAT with random walk.
//!
//! Reference: Selman, Kautz, Cohen: Noise strategies for improving local
//! search (1994).

use crate::instance::Instance;
use crate::registry::SolverEntry;
use crate::solvers::local_search::gsat::best_flip;
use crate::solvers::local_search::{random_total_assignment, unsatisfied_variables};
use crate::solvers::SearchOutcome;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand::RngExt;

inventory::submit! {
    SolverEntry {
        name: "gsat_with_walk",
        family: "local_search",
        description: "GSAT mixing greedy flips with random walk steps on unsatisfied variables",
        instrumented: true,
    }
}

/// Decide satisfiability with GSAT plus random walk.
///
/// As [`solve_gsat`], but each flip is a walk step with probability
/// `walk_probability`: a variable drawn uniformly from those occurring in
/// some unsatisfied clause. Otherwise the greedy GSAT rule applies. The
/// reported iteration count is the number of assignments checked.
///
/// [`solve_gsat`]: crate::solvers::solve_gsat
pub fn solve_gsat_with_walk<R: Rng>(
    instance: &Instance,
    max_tries: usize,
    walk_probability: f64,
    rng: &mut R,
) -> SearchOutcome {
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

            let variable = if rng.random_bool(walk_probability) {
                let walkable = unsatisfied_variables(instance, &assignment);
                *walkable
                    .choose(rng)
                    .expect("an unsatisfied clause mentions a variable")
            } else {
                best_flip(instance, &assignment, &variables, rng)
            };
            assignment.flip(variable);
        }
    }

    SearchOutcome::new(false, iterations)
}

#[cfg(test)]
#[path = "../../unit_tests/solvers/local_search/gsat_walk.rs"]
mod tests;
