//! CNF clauses.
//!
//! A clause is a disjunction (OR) of literals. Literals are signed integers:
//! positive `i` means variable `i`, negative `-i` means NOT variable `i`.
//! Variables are 1-indexed.

use crate::instance::Assignment;
use serde::{Deserialize, Serialize};

/// A clause in conjunctive normal form.
///
/// The literal order is the insertion order; solvers rely on it only for
/// deterministic tie-breaking. A well-formed clause never mentions the same
/// literal twice (this is enforced by [`Instance::from_clauses`]).
///
/// [`Instance::from_clauses`]: crate::instance::Instance::from_clauses
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Clause {
    /// Literals in this clause (signed integers, 1-indexed).
    pub literals: Vec<i32>,
}

impl Clause {
    /// Create a new clause from literals.
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    /// Number of literals.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// The empty clause is unsatisfiable under every assignment.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// A unit clause has exactly one literal.
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    /// A tautological clause contains a literal together with its negation.
    pub fn is_tautology(&self) -> bool {
        self.literals.iter().any(|&lit| self.contains(-lit))
    }

    /// Whether the clause mentions this exact literal.
    pub fn contains(&self, literal: i32) -> bool {
        self.literals.contains(&literal)
    }

    /// Variables mentioned by this clause, one entry per literal.
    pub fn variables(&self) -> impl Iterator<Item = i32> + '_ {
        self.literals.iter().map(|lit| lit.abs())
    }

    /// Whether the clause mentions the variable in either polarity.
    pub fn mentions_variable(&self, variable: i32) -> bool {
        self.contains(variable) || self.contains(-variable)
    }

    /// Check whether the clause is satisfied by a (possibly partial)
    /// assignment. A literal over an unassigned variable never satisfies
    /// the clause.
    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        self.literals
            .iter()
            .any(|&lit| assignment.satisfies_literal(lit))
    }

    /// Whether both clauses hold exactly the same literals, in any order.
    pub fn same_literals(&self, other: &Clause) -> bool {
        self.len() == other.len() && self.literals.iter().all(|&lit| other.contains(lit))
    }

    /// Whether every literal of `self` appears in `other` (C ⊆ C').
    pub fn subsumes(&self, other: &Clause) -> bool {
        self.literals.iter().all(|&lit| other.contains(lit))
    }
}

impl From<Vec<i32>> for Clause {
    fn from(literals: Vec<i32>) -> Self {
        Clause::new(literals)
    }
}

#[cfg(test)]
#[path = "../unit_tests/instance/clause.rs"]
mod tests;
