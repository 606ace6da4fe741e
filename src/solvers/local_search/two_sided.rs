//! Two-sided deterministic local search.

use crate::instance::{Assignment, Instance};
use crate::registry::SolverEntry;
use crate::solvers::local_search::search_hamming_ball;
use rand::Rng;

inventory::submit! {
    SolverEntry {
        name: "two_sided_local_search",
        family: "local_search",
        description: "Hamming-ball search of radius n/2 from the all-false and all-true assignments",
        instrumented: false,
    }
}

/// Decide satisfiability by searching the Hamming balls of radius `⌈n/2⌉`
/// around the all-false and the all-true assignment.
///
/// Every assignment lies within distance `⌈n/2⌉` of one of the two poles,
/// so the two balls together cover the whole space. Mainly sensible for
/// 3-SAT, where the ball search beats plain enumeration.
pub fn solve_two_sided_local_search<R: Rng>(instance: &Instance, rng: &mut R) -> bool {
    if instance.is_empty() {
        return true;
    }
    if instance.has_empty_clause() {
        return false;
    }

    let variables = instance.all_variables();
    let n = variables.len();
    let radius = n.div_ceil(2);

    let all_false = Assignment::constant(variables.iter().copied(), false);
    if search_hamming_ball(instance, &all_false, radius, rng) {
        return true;
    }
    let all_true = Assignment::constant(variables.iter().copied(), true);
    search_hamming_ball(instance, &all_true, radius, rng)
}

#[cfg(test)]
#[path = "../../unit_tests/solvers/local_search/two_sided.rs"]
mod tests;
