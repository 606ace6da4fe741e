//! Randomized local search with Hamming-ball descent.

use crate::instance::Instance;
use crate::registry::SolverEntry;
use crate::solvers::local_search::{random_total_assignment, search_hamming_ball};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use rand::Rng;

inventory::submit! {
    SolverEntry {
        name: "random_local_search",
        family: "randomized",
        description: "Random start points with Hamming-ball search of radius n/4",
        instrumented: false,
    }
}

/// Decide satisfiability with randomized local search.
///
/// Each try draws a uniformly random total assignment and searches its
/// Hamming ball of radius `r = ⌈n/4⌉`. A random ball covers a satisfying
/// assignment with probability `Σ_{i≤r} C(n,i) / 2^n`, so
/// `⌈(-ln ε)·2^n / Σ_{i≤r} C(n,i)⌉` tries bound the one-sided error by ε.
/// A `true` verdict is always correct.
///
/// Reference: Schöning, p. 97 f.
pub fn solve_random_local_search<R: Rng>(
    instance: &Instance,
    error_rate: f64,
    rng: &mut R,
) -> bool {
    if instance.is_empty() {
        return true;
    }
    if instance.has_empty_clause() {
        return false;
    }

    let variables: Vec<i32> = instance.all_variables().into_iter().collect();
    let n = variables.len();
    let radius = (n as f64 * 0.25).ceil() as usize;

    let ball_size: BigUint = (0..=radius).map(|i| binomial(n, i)).sum();
    let space_size = BigUint::one() << n;
    let miss_odds = (space_size.to_f64().unwrap_or(f64::MAX))
        / (ball_size.to_f64().unwrap_or(1.0));
    let tries = (-error_rate.ln() * miss_odds).ceil() as u64;

    for _ in 0..tries {
        let assignment = random_total_assignment(&variables, rng);
        if search_hamming_ball(instance, &assignment, radius, rng) {
            return true;
        }
    }
    false
}

/// The binomial coefficient C(n, k).
fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let mut result = BigUint::one();
    for i in 0..k {
        result = result * BigUint::from(n - i) / BigUint::from(i + 1);
    }
    result
}

#[cfg(test)]
#[path = "../../unit_tests/solvers/local_search/random_local_search.rs"]
mod tests;
