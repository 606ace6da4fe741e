//! The m×2n bit-matrix encoding of a CNF formula.
//!
//! Each clause is one row. Each variable owns two adjacent columns: column
//! `2(v-1)` marks "positive literal appears in this clause", column
//! `2(v-1)+1` marks "negative literal appears". The row weight equals the
//! clause length.
//!
//! ```text
//! (x1 ∨ x2) ∧ (¬x2 ∨ x3)
//!
//! 101000
//! 000110
//! ```
//!
//! Variables are mapped to column pairs in first-occurrence order, the same
//! mapping [`Instance::normalize`] uses, so decoding a matrix produced from
//! a non-contiguous instance yields its normalized form.

use crate::error::{Result, SatError};
use crate::instance::{Clause, Instance};
use bitvec::prelude::*;
use std::collections::BTreeMap;
use std::fmt;

/// A compact, cache-friendly view of an [`Instance`].
///
/// Only computable when the instance has no empty clause and at least one
/// variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    rows: Vec<BitVec>,
    num_variables: usize,
}

impl BitMatrix {
    /// Encode an instance. Fails with [`SatError::BitMatrixUnavailable`] when
    /// the instance has an empty clause or no variables.
    pub fn from_instance(instance: &Instance) -> Result<Self> {
        if instance.has_empty_clause() {
            return Err(SatError::BitMatrixUnavailable(
                "instance contains an empty clause".into(),
            ));
        }
        if instance.num_variables() == 0 {
            return Err(SatError::BitMatrixUnavailable(
                "instance has no variables".into(),
            ));
        }

        // Column pairs in first-occurrence order, as in Instance::normalize.
        let mut column_of: BTreeMap<i32, usize> = BTreeMap::new();
        for clause in instance.clauses() {
            for variable in clause.variables() {
                let next = column_of.len();
                column_of.entry(variable).or_insert(next);
            }
        }

        let width = 2 * column_of.len();
        let rows = instance
            .clauses()
            .iter()
            .map(|clause| {
                let mut row = bitvec![0; width];
                for &lit in &clause.literals {
                    let column = 2 * column_of[&lit.abs()] + usize::from(lit < 0);
                    row.set(column, true);
                }
                row
            })
            .collect();

        Ok(Self {
            rows,
            num_variables: column_of.len(),
        })
    }

    /// Assemble a matrix from raw rows. Fails when rows differ in length,
    /// have odd length, or encode no variables.
    pub fn from_rows(rows: Vec<BitVec>) -> Result<Self> {
        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        if width == 0 {
            return Err(SatError::MalformedBitMatrix(
                "matrix must have at least one clause and one variable".into(),
            ));
        }
        if width % 2 != 0 {
            return Err(SatError::MalformedBitMatrix(format!(
                "row length {width} is odd, expected two columns per variable"
            )));
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(SatError::MalformedBitMatrix(
                "rows differ in length".into(),
            ));
        }
        Ok(Self {
            rows,
            num_variables: width / 2,
        })
    }

    /// Number of clauses (rows).
    pub fn num_clauses(&self) -> usize {
        self.rows.len()
    }

    /// Number of variables (half the column count).
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Borrow a row.
    pub fn row(&self, index: usize) -> &BitSlice {
        &self.rows[index]
    }

    /// Number of literals in the clause encoded by this row.
    pub fn row_weight(&self, index: usize) -> usize {
        self.rows[index].count_ones()
    }

    /// Whether the clause in `row` mentions the `variable`-th column pair
    /// (0-indexed) in either polarity.
    pub fn row_has_variable(&self, row: usize, variable: usize) -> bool {
        self.rows[row][2 * variable] || self.rows[row][2 * variable + 1]
    }

    /// Whether two rows share at least one variable, irrespective of polarity.
    pub fn rows_share_variable(&self, a: usize, b: usize) -> bool {
        (0..self.num_variables)
            .any(|variable| self.row_has_variable(a, variable) && self.row_has_variable(b, variable))
    }

    /// Positive and negative occurrence counts of the `variable`-th column
    /// pair (0-indexed) across all clauses.
    pub fn variable_occurrences(&self, variable: usize) -> (usize, usize) {
        let positive = self.rows.iter().filter(|row| row[2 * variable]).count();
        let negative = self.rows.iter().filter(|row| row[2 * variable + 1]).count();
        (positive, negative)
    }

    /// Decode back into clauses; row order is preserved, literals appear in
    /// ascending variable order.
    pub fn to_clauses(&self) -> Vec<Clause> {
        self.rows
            .iter()
            .map(|row| {
                let literals = row
                    .iter_ones()
                    .map(|column| {
                        let variable = (column / 2) as i32 + 1;
                        if column % 2 == 0 {
                            variable
                        } else {
                            -variable
                        }
                    })
                    .collect();
                Clause::new(literals)
            })
            .collect()
    }
}

impl fmt::Display for BitMatrix {
    /// One clause per line, `2n` characters of `0`/`1` each.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for bit in row.iter().by_vals() {
                write!(f, "{}", u8::from(bit))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../unit_tests/instance/bit_matrix.rs"]
mod tests;
