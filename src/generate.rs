//! Random k-SAT instance generation.

use crate::error::{Result, SatError};
use crate::instance::{Clause, Instance};
use rand::seq::index;
use rand::Rng;
use rand::RngExt;

/// Generate a random k-SAT instance with `n` variables and `m` clauses.
///
/// Each clause picks `k` distinct variables uniformly and negates each with
/// probability one half. Clauses may repeat and not every variable needs to
/// occur; call [`Instance::normalize`] where contiguity is required.
pub fn random_k_sat<R: Rng>(n: usize, m: usize, k: usize, rng: &mut R) -> Result<Instance> {
    if k > n {
        return Err(SatError::UnsupportedInstance(format!(
            "cannot draw {k} distinct variables out of {n}"
        )));
    }

    let mut clauses = Vec::with_capacity(m);
    for _ in 0..m {
        let literals = index::sample(rng, n, k)
            .iter()
            .map(|position| {
                let variable = position as i32 + 1;
                if rng.random_bool(0.5) {
                    variable
                } else {
                    -variable
                }
            })
            .collect();
        clauses.push(Clause::new(literals));
    }

    Instance::from_clauses(clauses)
}

#[cfg(test)]
#[path = "unit_tests/generate.rs"]
mod tests;
