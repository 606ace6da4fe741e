//! Property-based tests using proptest.
//!
//! These verify the library's core invariants: the clause/bit-matrix
//! duality, simplification correctness, kernelization idempotence, and the
//! agreement of every complete solver with the exhaustive oracle.

use proptest::prelude::*;
use satkernel::kernel::{classify_kernel, normalize_to_kernel, KernelVerdict};
use satkernel::prelude::*;
use std::collections::BTreeSet;

/// Strategy for random instances: up to `max_vars` variables and
/// `max_clauses` clauses of width 1..=3, duplicate-literal free.
fn instance_strategy(max_vars: i32, max_clauses: usize) -> impl Strategy<Value = Instance> {
    let clause = prop::collection::btree_set((1..=max_vars, prop::bool::ANY), 1..=3).prop_map(
        |literals| {
            literals
                .into_iter()
                .map(|(variable, negate)| if negate { -variable } else { variable })
                .collect::<Vec<i32>>()
        },
    );
    prop::collection::vec(clause, 1..=max_clauses)
        .prop_map(|clauses| Instance::from_literals(clauses).unwrap())
}

/// Strategy for a partial assignment over variables 1..=max_vars.
fn assignment_strategy(max_vars: i32) -> impl Strategy<Value = Assignment> {
    prop::collection::btree_map(1..=max_vars, prop::bool::ANY, 0..=max_vars as usize)
        .prop_map(|values| values.into_iter().collect())
}

/// Clause multiset view: instance equality up to clause order and
/// literal order.
fn clause_multiset(instance: &Instance) -> Vec<BTreeSet<i32>> {
    let mut clauses: Vec<BTreeSet<i32>> = instance
        .clauses()
        .iter()
        .map(|clause| clause.literals.iter().copied().collect())
        .collect();
    clauses.sort();
    clauses
}

/// Exhaustively check whether some extension of `fixed` satisfies the
/// instance.
fn satisfiable_under(instance: &Instance, fixed: &Assignment) -> bool {
    let free: Vec<i32> = instance
        .all_variables()
        .into_iter()
        .filter(|&variable| !fixed.contains(variable))
        .collect();
    (0..1u32 << free.len()).any(|word| {
        let mut assignment = fixed.clone();
        for (bit, &variable) in free.iter().enumerate() {
            assignment.set(variable, word >> bit & 1 == 1);
        }
        instance.check_assignment(&assignment)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Decoding the bit matrix yields the normalized instance.
    #[test]
    fn bit_matrix_round_trips(instance in instance_strategy(6, 8)) {
        let matrix = instance.bit_matrix().unwrap();
        let decoded = Instance::from_bit_matrix(&matrix);
        prop_assert_eq!(
            clause_multiset(&decoded),
            clause_multiset(&instance.normalize())
        );
    }

    /// Simplification preserves satisfiability relative to the assignment.
    #[test]
    fn simplify_preserves_satisfiability(
        instance in instance_strategy(5, 8),
        assignment in assignment_strategy(5),
    ) {
        let simplified = instance.assign_and_simplify(&assignment);
        prop_assert_eq!(
            solve_brute_force(&simplified).satisfiable,
            satisfiable_under(&instance, &assignment)
        );
    }

    /// Kernel normalization is idempotent.
    #[test]
    fn kernelization_is_idempotent(instance in instance_strategy(6, 10)) {
        let once = normalize_to_kernel(&instance);
        prop_assert_eq!(normalize_to_kernel(&once), once);
    }

    /// Kernel normalization preserves satisfiability.
    #[test]
    fn kernelization_preserves_satisfiability(instance in instance_strategy(5, 8)) {
        let kernel = normalize_to_kernel(&instance);
        prop_assert_eq!(
            solve_brute_force(&kernel).satisfiable,
            solve_brute_force(&instance).satisfiable
        );
    }

    /// Every complete solver agrees with the exhaustive oracle.
    #[test]
    fn complete_solvers_agree_with_brute_force(instance in instance_strategy(6, 10)) {
        let expected = solve_brute_force(&instance).satisfiable;
        prop_assert_eq!(solve_dpll(&instance, heuristics::dlis).satisfiable, expected);
        prop_assert_eq!(solve_dpll_recursive(&instance, &mut heuristics::jeroslaw_wang), expected);
        prop_assert_eq!(solve_cdcl(&instance, heuristics::dlcs).satisfiable, expected);
        prop_assert_eq!(solve_monien_speckenmeyer(&instance, false).satisfiable, expected);
        prop_assert_eq!(solve_monien_speckenmeyer(&instance, true).satisfiable, expected);
        prop_assert_eq!(solve_monien_speckenmeyer_recursive(&instance, false), expected);
    }

    /// The structural criteria are one-sided certificates.
    #[test]
    fn structural_predicates_are_one_sided(instance in instance_strategy(6, 8)) {
        let satisfiable = solve_brute_force(&instance).satisfiable;
        if !is_biathlet_satisfied(&instance) {
            prop_assert!(satisfiable, "Biathlet certified a satisfiable formula");
        }
        if !is_tovey_satisfied(&instance) {
            prop_assert!(satisfiable, "Tovey certified a satisfiable formula");
        }
        if is_two_sat(&instance) {
            prop_assert_eq!(solve_two_sat(&instance).unwrap(), satisfiable);
        }
    }

    /// A classified kernel really is stable and non-trivial.
    #[test]
    fn kernel_classification_is_consistent(instance in instance_strategy(6, 10)) {
        let kernel = normalize_to_kernel(&instance);
        let verdict = classify_kernel(&kernel);
        prop_assert_ne!(verdict, KernelVerdict::Reducible);
        if verdict == KernelVerdict::EmptyClause {
            prop_assert!(!solve_brute_force(&kernel).satisfiable);
        }
    }
}
