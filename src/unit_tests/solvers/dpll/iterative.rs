use super::*;
use crate::instance::Instance;
use crate::solvers::dpll::heuristics;
use crate::solvers::solve_brute_force;

fn all_heuristics() -> Vec<(&'static str, fn(&Instance) -> i32)> {
    vec![
        ("dlis", heuristics::dlis),
        ("dlcs", heuristics::dlcs),
        ("mom", heuristics::mom),
        ("jeroslaw_wang", heuristics::jeroslaw_wang),
        ("jeroslaw_wang_two_sided", heuristics::jeroslaw_wang_two_sided),
        ("shortest_clause", heuristics::shortest_clause),
    ]
}

#[test]
fn test_satisfiable_with_every_heuristic() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    for (name, heuristic) in all_heuristics() {
        assert!(
            solve_dpll(&instance, heuristic).satisfiable,
            "heuristic {name} missed a satisfying assignment"
        );
    }
}

#[test]
fn test_unsatisfiable_with_every_heuristic() {
    let clauses = (0..8).map(|bits: i32| {
        vec![
            if bits & 1 == 0 { 1 } else { -1 },
            if bits & 2 == 0 { 2 } else { -2 },
            if bits & 4 == 0 { 3 } else { -3 },
        ]
    });
    let instance = Instance::from_literals(clauses).unwrap();
    for (name, heuristic) in all_heuristics() {
        assert!(
            !solve_dpll(&instance, heuristic).satisfiable,
            "heuristic {name} claimed satisfiability"
        );
    }
}

#[test]
fn test_terminal_cases() {
    let empty = Instance::from_literals([]).unwrap();
    let outcome = solve_dpll(&empty, heuristics::dlis);
    assert!(outcome.satisfiable);
    assert_eq!(outcome.iterations, 1);

    let conflict = Instance::from_literals([vec![]]).unwrap();
    assert!(!solve_dpll(&conflict, heuristics::dlis).satisfiable);
}

#[test]
fn test_unit_propagation_chain() {
    // x1 forces x2 forces x3; no branching needed.
    let instance =
        Instance::from_literals([vec![1], vec![-1, 2], vec![-2, 3]]).unwrap();
    let outcome = solve_dpll(&instance, heuristics::dlis);
    assert!(outcome.satisfiable);
    assert_eq!(outcome.iterations, 4);
}

#[test]
fn test_rdlcs_heuristic() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let instance = Instance::from_literals([vec![1, 2], vec![-1, 2], vec![-2, 3]]).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let outcome = solve_dpll(&instance, heuristics::rdlcs(&mut rng));
    assert!(outcome.satisfiable);
}

#[test]
fn test_agrees_with_brute_force_on_small_instances() {
    let cases = [
        vec![vec![1, 2, 3], vec![-1, -2], vec![2, -3], vec![-1, 3]],
        vec![vec![1], vec![-1, 2], vec![-2]],
        vec![vec![1, -2], vec![2, -3], vec![3, -1], vec![1, 2, 3], vec![-1, -2, -3]],
    ];
    for clauses in cases {
        let instance = Instance::from_literals(clauses).unwrap();
        let expected = solve_brute_force(&instance).satisfiable;
        for (name, heuristic) in all_heuristics() {
            assert_eq!(
                solve_dpll(&instance, heuristic).satisfiable,
                expected,
                "heuristic {name} disagrees with brute force"
            );
        }
    }
}
