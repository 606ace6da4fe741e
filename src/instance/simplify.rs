//! The assignment/simplification primitive every solver builds on.

use crate::instance::{Assignment, Clause, Instance};

impl Instance {
    /// Apply a partial assignment and simplify.
    ///
    /// Every clause containing a literal the assignment makes true is
    /// removed; from the remaining clauses every literal the assignment
    /// makes false is deleted. Variables absent from the assignment are
    /// preserved. Returns a new instance; a clause reduced to zero literals
    /// stays as the empty clause.
    pub fn assign_and_simplify(&self, assignment: &Assignment) -> Instance {
        let clauses = self
            .clauses()
            .iter()
            .filter(|clause| !satisfied_by(clause, assignment))
            .map(|clause| strip_falsified(clause, assignment))
            .collect();
        Instance::from_parts(clauses)
    }

    /// Like [`Instance::assign_and_simplify`], but additionally maps each
    /// surviving clause back to its position in the original instance that
    /// produced `parents`. Conflict analysis uses the returned indices to
    /// look up antecedent clauses in the global store.
    pub fn assign_and_simplify_with_provenance(
        &self,
        assignment: &Assignment,
        parents: &[usize],
    ) -> (Instance, Vec<usize>) {
        debug_assert_eq!(parents.len(), self.num_clauses());
        let mut clauses = Vec::new();
        let mut surviving_parents = Vec::new();
        for (clause, &parent) in self.clauses().iter().zip(parents) {
            if satisfied_by(clause, assignment) {
                continue;
            }
            clauses.push(strip_falsified(clause, assignment));
            surviving_parents.push(parent);
        }
        (Instance::from_parts(clauses), surviving_parents)
    }
}

fn satisfied_by(clause: &Clause, assignment: &Assignment) -> bool {
    clause
        .literals
        .iter()
        .any(|&lit| assignment.satisfies_literal(lit))
}

fn strip_falsified(clause: &Clause, assignment: &Assignment) -> Clause {
    Clause::new(
        clause
            .literals
            .iter()
            .copied()
            .filter(|&lit| !assignment.satisfies_literal(-lit))
            .collect(),
    )
}

#[cfg(test)]
#[path = "../unit_tests/instance/simplify.rs"]
mod tests;
