//! WalkSAT: clause-focused random walk.
//!
//! Reference: Selman, Kautz, Cohen: Noise strategies for improving local
//! search (1994).

use crate::instance::Instance;
use crate::registry::SolverEntry;
use crate::solvers::local_search::gsat::best_flip;
use crate::solvers::local_search::random_total_assignment;
use crate::solvers::SearchOutcome;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand::RngExt;

inventory::submit! {
    SolverEntry {
        name: "walksat",
        family: "local_search",
        description: "Per-flip focus on one random unsatisfied clause, mixing noise and greedy steps",
        instrumented: true,
    }
}

/// Decide satisfiability with WalkSAT.
///
/// Each flip first picks an unsatisfied clause uniformly at random. With
/// probability `walk_probability` one of its variables is flipped uniformly;
/// otherwise the greedy GSAT rule is applied restricted to the clause's
/// variables. Restarts and flip budget as in [`solve_gsat`]. The reported
/// iteration count is the number of assignments checked.
///
/// [`solve_gsat`]: crate::solvers::solve_gsat
pub fn solve_walksat<R: Rng>(
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

            let unsatisfied = instance.unsatisfied_clauses(&assignment);
            let clause = *unsatisfied
                .choose(rng)
                .expect("unsatisfied instance has an unsatisfied clause");
            let candidates: Vec<i32> = clause.variables().collect();

            let variable = if rng.random_bool(walk_probability) {
                *candidates
                    .choose(rng)
                    .expect("clause has at least one literal")
            } else {
                best_flip(instance, &assignment, &candidates, rng)
            };
            assignment.flip(variable);
        }
    }

    SearchOutcome::new(false, iterations)
}

#[cfg(test)]
#[path = "../../unit_tests/solvers/local_search/walksat.rs"]
mod tests;
