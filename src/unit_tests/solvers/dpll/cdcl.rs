use super::*;
use crate::instance::Instance;
use crate::solvers::dpll::heuristics;
use crate::solvers::solve_brute_force;

#[test]
fn test_satisfiable_instance() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    assert!(solve_cdcl(&instance, heuristics::dlis).satisfiable);
}

#[test]
fn test_unsatisfiable_unit_pair() {
    let instance = Instance::from_literals([vec![1], vec![-1]]).unwrap();
    assert!(!solve_cdcl(&instance, heuristics::dlis).satisfiable);
}

#[test]
fn test_terminal_cases() {
    let empty = Instance::from_literals([]).unwrap();
    assert!(solve_cdcl(&empty, heuristics::dlis).satisfiable);
    let conflict = Instance::from_literals([vec![]]).unwrap();
    assert!(!solve_cdcl(&conflict, heuristics::dlis).satisfiable);
}

#[test]
fn test_unsatisfiable_full_clause_set() {
    let clauses = (0..8).map(|bits: i32| {
        vec![
            if bits & 1 == 0 { 1 } else { -1 },
            if bits & 2 == 0 { 2 } else { -2 },
            if bits & 4 == 0 { 3 } else { -3 },
        ]
    });
    let instance = Instance::from_literals(clauses).unwrap();
    assert!(!solve_cdcl(&instance, heuristics::dlis).satisfiable);
}

#[test]
fn test_conflict_requires_learning() {
    // Forces a conflict one decision deep: after deciding x1, unit
    // propagation through x2 and x3 collapses (¬x2 ∨ ¬x3).
    let instance = Instance::from_literals([
        vec![1, 2],
        vec![-1, 2],
        vec![-2, 3],
        vec![-2, -3, 4],
        vec![-4, -3],
    ])
    .unwrap();
    let outcome = solve_cdcl(&instance, heuristics::dlis);
    assert_eq!(
        outcome.satisfiable,
        solve_brute_force(&instance).satisfiable
    );
}

#[test]
fn test_agrees_with_brute_force_with_every_heuristic() {
    let heuristic_list: Vec<(&str, fn(&Instance) -> i32)> = vec![
        ("dlis", heuristics::dlis),
        ("dlcs", heuristics::dlcs),
        ("mom", heuristics::mom),
        ("jeroslaw_wang", heuristics::jeroslaw_wang),
        ("jeroslaw_wang_two_sided", heuristics::jeroslaw_wang_two_sided),
        ("shortest_clause", heuristics::shortest_clause),
    ];
    let cases = [
        vec![vec![1, 2, 3], vec![-1, -2], vec![2, -3], vec![-1, 3]],
        vec![vec![1, 2], vec![1, -2], vec![-1, 2], vec![-1, -2]],
        vec![vec![1, -2], vec![2, -3], vec![3, -1], vec![1, 2, 3], vec![-1, -2, -3]],
        vec![vec![1, 2], vec![-2, 3], vec![-3, -1], vec![2, 3]],
    ];
    for clauses in cases {
        let instance = Instance::from_literals(clauses).unwrap();
        let expected = solve_brute_force(&instance).satisfiable;
        for &(name, heuristic) in &heuristic_list {
            assert_eq!(
                solve_cdcl(&instance, heuristic).satisfiable,
                expected,
                "heuristic {name} disagrees with brute force"
            );
        }
    }
}
