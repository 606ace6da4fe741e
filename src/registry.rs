//! Solver registry for introspection and discovery.
//!
//! Each solver module registers a [`SolverEntry`] at link time via
//! [`inventory::submit!`]; the experiment harness enumerates them with
//! [`collect_solvers`] instead of hard-coding the solver list.

/// Metadata describing one solver.
#[derive(Debug)]
pub struct SolverEntry {
    /// Stable identifier, e.g. `"cdcl"`.
    pub name: &'static str,
    /// Algorithm family: `"dpll"`, `"splitting"`, `"randomized"`,
    /// `"local_search"`, `"enumeration"` or `"polynomial"`.
    pub family: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Whether the solver reports a [`SearchOutcome`] with iteration counts.
    ///
    /// [`SearchOutcome`]: crate::solvers::SearchOutcome
    pub instrumented: bool,
}

inventory::collect!(SolverEntry);

/// All registered solvers, sorted by name.
pub fn collect_solvers() -> Vec<&'static SolverEntry> {
    let mut entries: Vec<&'static SolverEntry> =
        inventory::iter::<SolverEntry>.into_iter().collect();
    entries.sort_by_key(|entry| entry.name);
    entries
}

#[cfg(test)]
#[path = "unit_tests/registry.rs"]
mod tests;
