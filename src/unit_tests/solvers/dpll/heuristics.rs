use super::*;
use crate::instance::Instance;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn example() -> Instance {
    // Counts: x2 twice positive, once negative; everything else once.
    Instance::from_literals([vec![1, 2], vec![-2, 3], vec![2]]).unwrap()
}

#[test]
fn test_dlis_picks_most_frequent_literal() {
    assert_eq!(dlis(&example()), 2);
}

#[test]
fn test_dlis_tie_break() {
    // All literals occur once: smallest variable wins, positive preferred.
    let instance = Instance::from_literals([vec![1, 2], vec![-1, 3]]).unwrap();
    assert_eq!(dlis(&instance), 1);
    // When only the negative polarity is a candidate, it is returned.
    let negative = Instance::from_literals([vec![2, -1], vec![3, -4]]).unwrap();
    assert_eq!(dlis(&negative), -1);
}

#[test]
fn test_dlcs_picks_most_frequent_variable() {
    // x2 occurs three times in total, more often positively.
    assert_eq!(dlcs(&example()), 2);
}

#[test]
fn test_dlcs_prefers_negative_majority() {
    let instance =
        Instance::from_literals([vec![-2, 1], vec![-2, 3], vec![2, 4]]).unwrap();
    assert_eq!(dlcs(&instance), -2);
}

#[test]
fn test_rdlcs_polarity_is_random_but_variable_fixed() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut heuristic = rdlcs(&mut rng);
    for _ in 0..16 {
        let literal = heuristic(&example());
        assert_eq!(literal.abs(), 2);
    }
}

#[test]
fn test_mom_counts_shortest_clauses_only() {
    // Shortest clauses have width 2; x1 occurs in both of them.
    let instance =
        Instance::from_literals([vec![1, 2], vec![-1, 3], vec![2, 3, 4]]).unwrap();
    assert_eq!(mom(&instance), 1);
}

#[test]
fn test_mom_returns_positive_literal() {
    let instance = Instance::from_literals([vec![-1, -2], vec![-1, 2]]).unwrap();
    assert!(mom(&instance) > 0);
}

#[test]
fn test_jeroslaw_wang_weighs_short_clauses() {
    // x2 scores 2^-2 + 2^-1, beating every other literal.
    assert_eq!(jeroslaw_wang(&example()), 2);
}

#[test]
fn test_jeroslaw_wang_two_sided() {
    // x2 has the highest combined score; its positive side dominates.
    assert_eq!(jeroslaw_wang_two_sided(&example()), 2);
    let negative =
        Instance::from_literals([vec![-2], vec![-2, 1], vec![2, 3]]).unwrap();
    assert_eq!(jeroslaw_wang_two_sided(&negative), -2);
}

#[test]
fn test_shortest_clause_heuristic() {
    assert_eq!(shortest_clause(&example()), 2);
    let instance = Instance::from_literals([vec![1, 2], vec![-3, 4]]).unwrap();
    assert_eq!(shortest_clause(&instance), 1);
}
