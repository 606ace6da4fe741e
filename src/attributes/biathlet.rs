//! The Biathlet counting criterion.

use crate::instance::Instance;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Check whether the clauses exclude enough assignments for the instance to
/// be unsatisfiable.
///
/// With `n` variables there are `2^n` assignments ("targets"). A clause with
/// `|c|` literals over distinct variables falsifies exactly `2^(n-|c|)` of
/// them ("shots"); a tautological clause falsifies none. Returns whether
/// `Σ_c 2^(n-|c|) ≥ 2^n`: only then can the shots cover every target, so a
/// smaller sum certifies trivial satisfiability.
///
/// Reference: Schöning, p. 32 ff.
pub fn is_biathlet_satisfied(instance: &Instance) -> bool {
    let n = instance.num_variables();
    let targets = BigUint::one() << n;

    let mut shots = BigUint::zero();
    for clause in instance.clauses() {
        if clause.is_tautology() {
            continue;
        }
        shots += BigUint::one() << (n - clause.len());
    }

    shots >= targets
}

#[cfg(test)]
#[path = "../unit_tests/attributes/biathlet.rs"]
mod tests;
