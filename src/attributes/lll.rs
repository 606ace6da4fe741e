//! The Lovász Local Lemma criterion.

use crate::error::{Result, SatError};
use crate::instance::Instance;

/// Check whether the instance may be unsatisfiable under the Lovász Local
/// Lemma.
///
/// Applicable only when every clause has the same length `k`. For each
/// clause, count the other clauses sharing at least one variable with it;
/// if some clause has at least `2^(k-2)` such neighbours the formula may be
/// unsatisfiable and `Ok(true)` is returned. When every count stays below
/// the bound, the LLL guarantees a satisfying assignment exists: `Ok(false)`.
///
/// The empty instance is trivially satisfiable and yields `Ok(false)`.
/// Non-uniform clause lengths yield [`SatError::LllNotApplicable`].
///
/// Reference: Schöning, p. 32 f.
pub fn is_lll_satisfied(instance: &Instance) -> Result<bool> {
    if instance.is_empty() {
        return Ok(false);
    }

    let matrix = instance.bit_matrix()?;
    let k = matrix.row_weight(0);
    if (1..matrix.num_clauses()).any(|row| matrix.row_weight(row) != k) {
        return Err(SatError::LllNotApplicable);
    }

    let threshold = 2f64.powi(k as i32 - 2);
    for i in 0..matrix.num_clauses() {
        let neighbours = (0..matrix.num_clauses())
            .filter(|&j| j != i && matrix.rows_share_variable(i, j))
            .count();
        if neighbours as f64 >= threshold {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
#[path = "../unit_tests/attributes/lll.rs"]
mod tests;
