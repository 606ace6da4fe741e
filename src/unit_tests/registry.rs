use super::*;

#[test]
fn test_all_solver_families_are_registered() {
    let solvers = collect_solvers();
    let names: Vec<&str> = solvers.iter().map(|entry| entry.name).collect();
    for expected in [
        "brute_force",
        "cdcl",
        "dantsin",
        "dpll",
        "dpll_recursive",
        "gsat",
        "gsat_with_walk",
        "monien_speckenmeyer",
        "ppz",
        "random_local_search",
        "schoening",
        "two_sat",
        "two_sided_local_search",
        "walksat",
    ] {
        assert!(names.contains(&expected), "missing solver {expected}");
    }
}

#[test]
fn test_entries_are_sorted_and_unique() {
    let solvers = collect_solvers();
    let names: Vec<&str> = solvers.iter().map(|entry| entry.name).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(names, sorted);
}

#[test]
fn test_instrumented_flags() {
    let solvers = collect_solvers();
    let instrumented = |name: &str| {
        solvers
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.instrumented)
    };
    assert_eq!(instrumented("cdcl"), Some(true));
    assert_eq!(instrumented("ppz"), Some(false));
}
