//! Satisfiability decision algorithms.
//!
//! Every solver consumes an [`Instance`] and produces a verdict; none
//! returns a model. The instrumented solvers (iterative DPLL, CDCL,
//! Monien–Speckenmeyer, Schöning, the GSAT family, brute force) additionally
//! report the number of search steps as a [`SearchOutcome`], which the
//! experiment harness uses to compare algorithms.
//!
//! Randomized solvers draw from an injected [`rand::Rng`], so a fixed seed
//! reproduces a run exactly; they may answer "unsatisfiable" wrongly with
//! probability bounded by their error-rate parameter, but never claim
//! satisfiability wrongly.

mod brute_force;
pub mod dpll;
pub mod local_search;
mod monien_speckenmeyer;
mod ppz;
mod two_sat;

pub use brute_force::solve_brute_force;
pub use dpll::{solve_cdcl, solve_dpll, solve_dpll_recursive};
pub use local_search::{
    generate_cover_code, search_hamming_ball, solve_dantsin, solve_gsat, solve_gsat_with_walk,
    solve_random_local_search, solve_schoening, solve_two_sided_local_search, solve_walksat,
};
pub use monien_speckenmeyer::{solve_monien_speckenmeyer, solve_monien_speckenmeyer_recursive};
pub use ppz::solve_ppz;
pub use two_sat::solve_two_sat;

use crate::instance::Instance;
use serde::{Deserialize, Serialize};

/// Default acceptable one-sided error rate of the randomized solvers.
pub const DEFAULT_ERROR_RATE: f64 = 1e-8;

/// Default random-walk probability for GSAT-with-walk and WalkSAT.
pub const DEFAULT_WALK_PROBABILITY: f64 = 0.55;

/// Default number of restarts for the GSAT family.
pub const DEFAULT_MAX_TRIES: usize = 1000;

/// Verdict of an instrumented solver together with the number of search
/// steps it explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Whether a satisfying assignment exists (or, for randomized solvers,
    /// was found within the iteration budget).
    pub satisfiable: bool,
    /// Search nodes or candidate assignments examined.
    pub iterations: usize,
}

impl SearchOutcome {
    pub(crate) fn new(satisfiable: bool, iterations: usize) -> Self {
        Self {
            satisfiable,
            iterations,
        }
    }
}

/// A node of an explicit DPLL-style search stack: the reduced instance plus
/// the literals committed on the way to it.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub instance: Instance,
    pub trail: Vec<i32>,
}

impl SearchNode {
    pub fn root(instance: Instance) -> Self {
        Self {
            instance,
            trail: Vec::new(),
        }
    }

    pub fn extend(&self, instance: Instance, literals: &[i32]) -> Self {
        let mut trail = self.trail.clone();
        trail.extend_from_slice(literals);
        // Simplification removed every committed variable from the instance.
        debug_assert!({
            let remaining = instance.all_variables();
            trail.iter().all(|lit| !remaining.contains(&lit.abs()))
        });
        Self { instance, trail }
    }
}
