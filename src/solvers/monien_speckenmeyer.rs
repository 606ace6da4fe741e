//! Monien–Speckenmeyer clause splitting.
//!
//! Select a clause of minimal length `k` and explore `k` branches: branch
//! `i` assumes the first `i` literals false and the `i`-th literal true.
//! With autark preprocessing enabled, each branch assignment is first tested
//! for autarky; an autark assignment shrinks the instance without branching.
//!
//! References: Monien, Speckenmeyer: Solving satisfiability in less than
//! 2^n steps (1985); Schöning, p. 81 f.

use crate::attributes::is_autark;
use crate::instance::{Assignment, Clause, Instance};
use crate::registry::SolverEntry;
use crate::solvers::{SearchNode, SearchOutcome};

inventory::submit! {
    SolverEntry {
        name: "monien_speckenmeyer",
        family: "splitting",
        description: "Iterative clause splitting with optional autark-assignment preprocessing",
        instrumented: true,
    }
}

/// The branch assignment for index `i` of a clause: literals `0..i` are set
/// false and literal `i` is set true.
///
/// For the clause `(1, -4, 8, 11, -12)` and `i = 2` this yields
/// `{1 ↦ false, 4 ↦ true, 8 ↦ true}`.
fn branch_assignment(clause: &Clause, index: usize) -> Assignment {
    let mut assignment = Assignment::new();
    for &lit in &clause.literals[..index] {
        assignment.set(lit.abs(), lit < 0);
    }
    let chosen = clause.literals[index];
    assignment.set(chosen.abs(), chosen > 0);
    assignment
}

/// The literals a branch assignment makes true, for the trail.
fn trail_extension(assignment: &Assignment) -> Vec<i32> {
    assignment.true_literals().collect()
}

/// Decide satisfiability with iterative Monien–Speckenmeyer splitting.
///
/// Branches are pushed in reverse so branch `i = 0` is explored first. The
/// reported iteration count is the number of nodes popped off the stack.
pub fn solve_monien_speckenmeyer(instance: &Instance, with_autark_check: bool) -> SearchOutcome {
    let mut stack = vec![SearchNode::root(instance.clone())];
    let mut iterations = 0;

    while let Some(node) = stack.pop() {
        iterations += 1;

        if node.instance.is_empty() {
            return SearchOutcome::new(true, iterations);
        }
        if node.instance.has_empty_clause() {
            continue;
        }

        let clause = shortest_clause(&node.instance).clone();
        let k = clause.len();

        if with_autark_check {
            let autark = (0..k)
                .map(|index| branch_assignment(&clause, index))
                .find(|assignment| is_autark(&node.instance, assignment));
            if let Some(assignment) = autark {
                let simplified = node.instance.assign_and_simplify(&assignment);
                stack.push(node.extend(simplified, &trail_extension(&assignment)));
                continue;
            }
        }

        for index in (0..k).rev() {
            let assignment = branch_assignment(&clause, index);
            let simplified = node.instance.assign_and_simplify(&assignment);
            stack.push(node.extend(simplified, &trail_extension(&assignment)));
        }
    }

    SearchOutcome::new(false, iterations)
}

/// Decide satisfiability with recursive Monien–Speckenmeyer splitting.
pub fn solve_monien_speckenmeyer_recursive(instance: &Instance, with_autark_check: bool) -> bool {
    if instance.is_empty() {
        return true;
    }
    if instance.has_empty_clause() {
        return false;
    }

    let clause = shortest_clause(instance).clone();
    let k = clause.len();

    if with_autark_check {
        for index in 0..k {
            let assignment = branch_assignment(&clause, index);
            if is_autark(instance, &assignment) {
                let simplified = instance.assign_and_simplify(&assignment);
                return solve_monien_speckenmeyer_recursive(&simplified, with_autark_check);
            }
        }
    }

    (0..k).any(|index| {
        let assignment = branch_assignment(&clause, index);
        let simplified = instance.assign_and_simplify(&assignment);
        solve_monien_speckenmeyer_recursive(&simplified, with_autark_check)
    })
}

/// The first clause of minimal length.
fn shortest_clause(instance: &Instance) -> &Clause {
    let k = instance
        .shortest_clause_length()
        .expect("instance has at least one clause");
    instance
        .clauses()
        .iter()
        .find(|clause| clause.len() == k)
        .expect("some clause has the minimum length")
}

#[cfg(test)]
#[path = "../unit_tests/solvers/monien_speckenmeyer.rs"]
mod tests;
