//! Exhaustive enumeration of all assignments.

use crate::instance::{Assignment, Instance};
use crate::registry::SolverEntry;
use crate::solvers::SearchOutcome;

inventory::submit! {
    SolverEntry {
        name: "brute_force",
        family: "enumeration",
        description: "Exhaustive check of all 2^n total assignments",
        instrumented: true,
    }
}

/// Decide satisfiability by checking every total assignment.
///
/// Exponential in the number of variables; intended as the oracle against
/// which the other solvers are validated on small instances. The reported
/// iteration count is the number of assignments examined.
pub fn solve_brute_force(instance: &Instance) -> SearchOutcome {
    let variables: Vec<i32> = instance.all_variables().into_iter().collect();
    let mut bits = vec![false; variables.len()];
    let mut iterations = 0;

    loop {
        iterations += 1;
        let assignment = Assignment::from_bits(&variables, &bits);
        if instance.check_assignment(&assignment) {
            return SearchOutcome::new(true, iterations);
        }
        if !advance(&mut bits) {
            return SearchOutcome::new(false, iterations);
        }
    }
}

/// Advance the assignment odometer; false once all combinations are spent.
fn advance(bits: &mut [bool]) -> bool {
    for bit in bits.iter_mut().rev() {
        *bit = !*bit;
        if *bit {
            return true;
        }
    }
    false
}

#[cfg(test)]
#[path = "../unit_tests/solvers/brute_force.rs"]
mod tests;
