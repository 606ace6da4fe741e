//! Kernelization: fixpoint simplification and kernel classification.
//!
//! A formula is a *problem kernel* when none of the reduction rules in
//! [`rules`] applies and none of the structural triviality criteria decides
//! it. [`normalize_to_kernel`] drives the rules to a fixpoint;
//! [`classify_kernel`] combines the rules with the criteria into a
//! [`KernelVerdict`].
//!
//! ```
//! use satkernel::instance::Instance;
//! use satkernel::kernel::normalize_to_kernel;
//!
//! // A single tautology reduces to the empty (trivially true) formula.
//! let instance = Instance::from_literals([vec![1, -1]]).unwrap();
//! assert!(normalize_to_kernel(&instance).is_empty());
//! ```

pub mod rules;

use crate::attributes::{
    is_biathlet_satisfied, is_lll_satisfied, is_one_connected_component, is_renamable_horn,
    is_tovey_satisfied, is_two_sat,
};
use crate::instance::Instance;
use serde::{Deserialize, Serialize};

/// Why an instance is, or is not, a problem kernel.
///
/// Every variant except [`KernelVerdict::Kernel`] names the first criterion
/// that decided or simplified the instance. A triviality hit is a
/// classification, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KernelVerdict {
    /// Some reduction rule still fires.
    Reducible,
    /// The instance contains an empty clause and is unsatisfiable.
    EmptyClause,
    /// Every clause has few enough neighbours for the Lovász Local Lemma to
    /// guarantee satisfiability.
    TriviallySatisfiableLll,
    /// The clauses exclude fewer than `2^n` assignments.
    TriviallySatisfiableBiathlet,
    /// The clause graph has several components; the formula splits into
    /// independent sub-formulas.
    Splittable,
    /// No variable occurs more often than the shortest clause length.
    TriviallySatisfiableTovey,
    /// The formula is 2-SAT and polynomially decidable.
    TwoSat,
    /// The formula is renamable Horn and polynomially decidable.
    RenamableHorn,
    /// A genuine problem kernel.
    Kernel,
}

/// Apply the first reduction rule that fires, in fixed order: unit clause,
/// tautology, duplicate/superset, pure literal, twin-clause merge. Returns
/// `None` when the instance is stable.
pub fn kernel_step(instance: &Instance) -> Option<Instance> {
    rules::remove_unit_clause(instance)
        .or_else(|| rules::remove_tautological_clauses(instance))
        .or_else(|| rules::remove_duplicate_and_superset_clauses(instance))
        .or_else(|| rules::remove_pure_literal(instance))
        .or_else(|| rules::merge_twin_clauses(instance))
}

/// Iterate [`kernel_step`] until no rule fires. Idempotent.
pub fn normalize_to_kernel(instance: &Instance) -> Instance {
    let mut current = instance.clone();
    while let Some(reduced) = kernel_step(&current) {
        current = reduced;
    }
    current
}

/// Classify an instance against the kernel criteria.
///
/// The checks run in fixed order and the first hit wins: reducibility, empty
/// clause, LLL, Biathlet, connectivity, Tovey, 2-SAT, renamable Horn. The
/// LLL check is skipped for instances with non-uniform clause lengths, where
/// it is not defined.
pub fn classify_kernel(instance: &Instance) -> KernelVerdict {
    if kernel_step(instance).is_some() {
        return KernelVerdict::Reducible;
    }
    if instance.has_empty_clause() {
        return KernelVerdict::EmptyClause;
    }
    let uniform = instance.longest_clause_length() == instance.shortest_clause_length();
    if uniform {
        if let Ok(false) = is_lll_satisfied(instance) {
            return KernelVerdict::TriviallySatisfiableLll;
        }
    }
    if !is_biathlet_satisfied(instance) {
        return KernelVerdict::TriviallySatisfiableBiathlet;
    }
    if !is_one_connected_component(instance) {
        return KernelVerdict::Splittable;
    }
    if !is_tovey_satisfied(instance) {
        return KernelVerdict::TriviallySatisfiableTovey;
    }
    if is_two_sat(instance) {
        return KernelVerdict::TwoSat;
    }
    if is_renamable_horn(instance) {
        return KernelVerdict::RenamableHorn;
    }
    KernelVerdict::Kernel
}

/// Whether the instance is already a problem kernel: stable under
/// [`kernel_step`] with no triviality criterion applying.
pub fn is_kernel_instance(instance: &Instance) -> bool {
    classify_kernel(instance) == KernelVerdict::Kernel
}

#[cfg(test)]
#[path = "../unit_tests/kernel/kernel.rs"]
mod tests;
