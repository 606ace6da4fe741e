//! Covering-code generation.
//!
//! A covering code of length `n` and radius `r` is a set of bit vectors
//! whose Hamming balls of radius `r` cover all of `{0,1}^n`. Dantsin's
//! search uses one as deterministic start points.
//!
//! For `n < 8` the code is built greedily over the full vector space. For
//! `n ≥ 8` and δ = 0.25 the base code `C0 = {0000, 0111, 1000, 1111}`
//! (length 4, radius 1) is self-concatenated to length `4⌈n/4⌉`, truncated
//! to `n` bits, and repaired by greedily adding any vectors the truncation
//! left uncovered. Other combinations are unsupported and fail fast.
//!
//! Reference: Schöning, p. 100 f.

use crate::error::{Result, SatError};

/// The length-4, radius-1 base code used for self-concatenation.
const BASE_CODE: [[bool; 4]; 4] = [
    [false, false, false, false],
    [false, true, true, true],
    [true, false, false, false],
    [true, true, true, true],
];

/// Generate a covering code of length `n` and radius `⌊δ·n⌋`.
///
/// Fails with [`SatError::UnsupportedCoveringCode`] for `n ≥ 8` with
/// `δ ≠ 0.25`.
pub fn generate_cover_code(n: usize, delta: f64) -> Result<Vec<Vec<bool>>> {
    if n < 8 {
        return Ok(generate_greedy(n, (delta * n as f64) as usize));
    }
    if delta != 0.25 {
        return Err(SatError::UnsupportedCoveringCode { n, delta });
    }
    Ok(generate_quarter_radius(n))
}

/// The δ = 0.25 construction, defined for every `n ≥ 1`.
pub(crate) fn generate_quarter_radius(n: usize) -> Vec<Vec<bool>> {
    if n < 8 {
        return generate_greedy(n, n / 4);
    }
    let base: Vec<Vec<bool>> = BASE_CODE.iter().map(|word| word.to_vec()).collect();
    if n % 4 == 0 {
        self_concatenate(&base, n / 4)
    } else {
        let extended = self_concatenate(&base, n / 4 + 1);
        adapt_code(extended, n, n / 4)
    }
}

/// Greedy construction: repeatedly add the vector whose radius-`r` ball
/// covers the most still-uncovered vectors, until everything is covered.
fn generate_greedy(n: usize, radius: usize) -> Vec<Vec<bool>> {
    let vectors = all_vectors(n);
    let mut uncovered: Vec<bool> = vec![true; vectors.len()];
    let mut remaining = vectors.len();
    let mut code = Vec::new();

    while remaining > 0 {
        let mut best_center: Option<usize> = None;
        let mut best_gain = 0;
        for center in 0..vectors.len() {
            let gain = (0..vectors.len())
                .filter(|&index| {
                    uncovered[index]
                        && hamming_distance(&vectors[center], &vectors[index]) <= radius
                })
                .count();
            if gain > best_gain {
                best_gain = gain;
                best_center = Some(center);
            }
        }

        let center = best_center.expect("some uncovered vector covers itself");
        code.push(vectors[center].clone());
        for index in 0..vectors.len() {
            if uncovered[index] && hamming_distance(&vectors[center], &vectors[index]) <= radius {
                uncovered[index] = false;
                remaining -= 1;
            }
        }
    }
    code
}

/// Every codeword of the `k`-fold concatenation is the bit-concatenation of
/// one chosen base codeword per block.
fn self_concatenate(code: &[Vec<bool>], k: usize) -> Vec<Vec<bool>> {
    debug_assert!(k >= 1);
    let mut result: Vec<Vec<bool>> = vec![Vec::new()];
    for _ in 0..k {
        result = result
            .iter()
            .flat_map(|prefix| {
                code.iter().map(move |word| {
                    let mut extended = prefix.clone();
                    extended.extend_from_slice(word);
                    extended
                })
            })
            .collect();
    }
    result
}

/// Truncate each codeword to `target_n` bits, then restore the covering
/// property by greedily adding uncovered vectors as new codewords.
fn adapt_code(extended: Vec<Vec<bool>>, target_n: usize, radius: usize) -> Vec<Vec<bool>> {
    let mut code: Vec<Vec<bool>> = extended
        .into_iter()
        .map(|mut word| {
            word.truncate(target_n);
            word
        })
        .collect();

    let vectors = all_vectors(target_n);
    let covered = |code: &[Vec<bool>], vector: &[bool]| {
        code.iter()
            .any(|word| hamming_distance(word, vector) <= radius)
    };

    loop {
        let uncovered = vectors.iter().find(|vector| !covered(&code, vector));
        match uncovered {
            Some(vector) => code.push(vector.clone()),
            None => return code,
        }
    }
}

fn all_vectors(n: usize) -> Vec<Vec<bool>> {
    (0..1usize << n)
        .map(|word| (0..n).map(|bit| word >> bit & 1 == 1).collect())
        .collect()
}

fn hamming_distance(a: &[bool], b: &[bool]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

#[cfg(test)]
#[path = "../../unit_tests/solvers/local_search/cover_code.rs"]
mod tests;
