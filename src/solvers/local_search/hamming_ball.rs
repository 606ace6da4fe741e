//! Radius-bounded local search around an assignment.

use crate::instance::{Assignment, Instance};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Search the Hamming ball of the given radius around a total assignment.
///
/// If the assignment satisfies the instance the search succeeds; at radius
/// zero it fails. Otherwise an unsatisfied clause is picked uniformly at
/// random, and for each of its literals the search recurses from the
/// assignment with that variable flipped and the radius reduced by one.
/// Succeeds as soon as any branch does.
///
/// A satisfying assignment at Hamming distance ≤ radius is always found:
/// any unsatisfied clause must change in at least one of its variables on
/// the way to a satisfying assignment.
///
/// Reference: Schöning, p. 94 f.
pub fn search_hamming_ball<R: Rng>(
    instance: &Instance,
    assignment: &Assignment,
    radius: usize,
    rng: &mut R,
) -> bool {
    debug_assert_eq!(assignment.len(), instance.num_variables());

    if instance.check_assignment(assignment) {
        return true;
    }
    if radius == 0 {
        return false;
    }

    let unsatisfied = instance.unsatisfied_clauses(assignment);
    let clause = unsatisfied
        .choose(rng)
        .expect("unsatisfied instance has an unsatisfied clause");

    clause.literals.iter().any(|&lit| {
        let mut flipped = assignment.clone();
        flipped.flip(lit.abs());
        search_hamming_ball(instance, &flipped, radius - 1, rng)
    })
}

#[cfg(test)]
#[path = "../../unit_tests/solvers/local_search/hamming_ball.rs"]
mod tests;
