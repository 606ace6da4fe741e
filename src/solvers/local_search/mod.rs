//! Local search solvers: the GSAT family, Schöning's random walk, and the
//! deterministic Hamming-ball searches.
//!
//! The GSAT family shares two parameters: `max_tries` restarts, each from a
//! fresh uniformly random total assignment, and `2n` flips per try. The
//! deterministic members replace random restarts by start points that
//! provably cover the assignment space (covering codes, or the two constant
//! assignments).

mod cover_code;
mod dantsin;
mod gsat;
mod gsat_walk;
mod hamming_ball;
mod random_local_search;
mod schoening;
mod two_sided;
mod walksat;

pub use cover_code::generate_cover_code;
pub use dantsin::solve_dantsin;
pub use gsat::solve_gsat;
pub use gsat_walk::solve_gsat_with_walk;
pub use hamming_ball::search_hamming_ball;
pub use random_local_search::solve_random_local_search;
pub use schoening::solve_schoening;
pub use two_sided::solve_two_sided_local_search;
pub use walksat::solve_walksat;

use crate::instance::{Assignment, Instance};
use rand::Rng;
use rand::RngExt;
use std::collections::BTreeSet;

/// A total assignment over the given variables, each value drawn uniformly.
pub(crate) fn random_total_assignment<R: Rng>(variables: &[i32], rng: &mut R) -> Assignment {
    variables
        .iter()
        .map(|&variable| (variable, rng.random_bool(0.5)))
        .collect()
}

/// The distinct variables occurring in currently unsatisfied clauses,
/// ascending.
pub(crate) fn unsatisfied_variables(instance: &Instance, assignment: &Assignment) -> Vec<i32> {
    let variables: BTreeSet<i32> = instance
        .unsatisfied_clauses(assignment)
        .into_iter()
        .flat_map(|clause| clause.variables())
        .collect();
    variables.into_iter().collect()
}
