//! The bit-matrix text format.
//!
//! One clause per line; each line has `2n` characters from `{0,1}`, two
//! columns per variable, positive before negative:
//!
//! ```text
//! (x1 ∨ x2) ∧ (¬x2 ∨ x3)
//!
//! 101000
//! 000110
//! ```

use crate::error::{Result, SatError};
use crate::instance::{BitMatrix, Instance};
use bitvec::prelude::*;

/// Parse the bit-matrix text format into an instance.
///
/// Every line must consist only of `0` and `1`, all lines must share one
/// even length, and at least one clause and variable must be present.
pub fn parse_bit_matrix(input: &str) -> Result<Instance> {
    let mut rows: Vec<BitVec> = Vec::new();
    for (index, line) in input.trim_end_matches('\n').lines().enumerate() {
        let mut row = BitVec::with_capacity(line.len());
        for character in line.chars() {
            match character {
                '0' => row.push(false),
                '1' => row.push(true),
                other => {
                    return Err(SatError::ParseError(format!(
                        "line {index}: invalid character {other:?}"
                    )))
                }
            }
        }
        rows.push(row);
    }

    let matrix =
        BitMatrix::from_rows(rows).map_err(|error| SatError::ParseError(error.to_string()))?;
    Ok(Instance::from_bit_matrix(&matrix))
}

/// Write the bit matrix of an instance as text, one clause per line.
///
/// Fails like [`Instance::bit_matrix`] when the matrix is undefined.
pub fn write_bit_matrix(instance: &Instance) -> Result<String> {
    Ok(format!("{}\n", instance.bit_matrix()?))
}

#[cfg(test)]
#[path = "../unit_tests/encoding/bit_matrix_text.rs"]
mod tests;
