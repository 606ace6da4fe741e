//! Dantsin's deterministic covering-code search.

use crate::instance::{Assignment, Instance};
use crate::registry::SolverEntry;
use crate::solvers::local_search::cover_code::generate_quarter_radius;
use crate::solvers::local_search::search_hamming_ball;
use rand::Rng;

inventory::submit! {
    SolverEntry {
        name: "dantsin",
        family: "local_search",
        description: "Hamming-ball search of radius n/4 from every codeword of a covering code",
        instrumented: false,
    }
}

/// Decide satisfiability with Dantsin's covering-code local search.
///
/// Generates a covering code of length `n` and radius `⌊n/4⌋` and runs a
/// Hamming-ball search of that radius from every codeword. The covering
/// property makes the sweep exhaustive: every assignment lies within radius
/// of some codeword, so a `false` verdict is definitive up to the randomized
/// clause picks inside the ball search.
///
/// Reference: Dantsin et al.: A deterministic (2-2/(k+1))^n algorithm for
/// k-SAT based on local search (2002).
pub fn solve_dantsin<R: Rng>(instance: &Instance, rng: &mut R) -> bool {
    if instance.is_empty() {
        return true;
    }
    if instance.has_empty_clause() {
        return false;
    }

    let variables: Vec<i32> = instance.all_variables().into_iter().collect();
    let n = variables.len();
    let radius = n / 4;

    generate_quarter_radius(n).iter().any(|codeword| {
        let assignment = Assignment::from_bits(&variables, codeword);
        search_hamming_ball(instance, &assignment, radius, rng)
    })
}

#[cfg(test)]
#[path = "../../unit_tests/solvers/local_search/dantsin.rs"]
mod tests;
