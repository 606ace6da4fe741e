//! # satkernel
//!
//! A Rust library of algorithms that decide Boolean satisfiability for CNF
//! formulas, together with kernelization and triviality checks that reduce a
//! formula to a non-trivial "problem kernel" or classify it as trivially
//! decidable.
//!
//! It is designed for algorithm research and education, not for industrial
//! SAT solving: there are no watched literals and no activity heuristics,
//! and every solver returns a plain verdict.
//!
//! ## Features
//!
//! - **Instance model**: clause lists with an equivalent bit-matrix view,
//!   validation, normalization, assignment and simplification
//! - **Kernelization**: unit clauses, tautologies, subsumption, pure
//!   literals and twin-clause merging driven to a fixpoint, plus structural
//!   triviality criteria (Lovász Local Lemma, Biathlet, Tovey, connectivity,
//!   2-SAT, renamable Horn)
//! - **Complete solvers**: brute force, iterative and recursive DPLL with
//!   pluggable heuristics, CDCL with 1-UIP clause learning,
//!   Monien–Speckenmeyer splitting
//! - **Randomized and local search**: Paturi–Pudlák–Zane, Schöning, the
//!   GSAT family, and covering-code based deterministic search
//!
//! ## Example
//!
//! ```rust
//! use satkernel::prelude::*;
//!
//! // (x1 ∨ x2) ∧ (¬x2 ∨ x3)
//! let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
//!
//! let outcome = solve_dpll(&instance, heuristics::dlis);
//! assert!(outcome.satisfiable);
//!
//! // The same verdict from the exhaustive oracle.
//! assert!(solve_brute_force(&instance).satisfiable);
//! ```

pub mod attributes;
pub mod encoding;
pub mod error;
pub mod generate;
pub mod instance;
pub mod kernel;
pub mod registry;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::attributes::{
        is_autark, is_biathlet_satisfied, is_lll_satisfied, is_one_connected_component,
        is_renamable_horn, is_tovey_satisfied, is_two_sat, pure_literal,
    };
    pub use crate::error::{Result, SatError};
    pub use crate::instance::{Assignment, BitMatrix, Clause, Instance};
    pub use crate::kernel::{
        classify_kernel, is_kernel_instance, kernel_step, normalize_to_kernel, KernelVerdict,
    };
    pub use crate::solvers::dpll::heuristics;
    pub use crate::solvers::{
        solve_brute_force, solve_cdcl, solve_dantsin, solve_dpll, solve_dpll_recursive,
        solve_gsat, solve_gsat_with_walk, solve_monien_speckenmeyer,
        solve_monien_speckenmeyer_recursive, solve_ppz, solve_random_local_search,
        solve_schoening, solve_two_sat, solve_two_sided_local_search, solve_walksat,
        SearchOutcome, DEFAULT_ERROR_RATE, DEFAULT_MAX_TRIES, DEFAULT_WALK_PROBABILITY,
    };
}
