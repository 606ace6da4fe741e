use super::*;
use crate::error::SatError;

fn hamming(a: &[bool], b: &[bool]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

fn assert_covers(code: &[Vec<bool>], n: usize, radius: usize) {
    for word in 0..1usize << n {
        let vector: Vec<bool> = (0..n).map(|bit| word >> bit & 1 == 1).collect();
        assert!(
            code.iter().any(|codeword| hamming(codeword, &vector) <= radius),
            "vector {word:b} of length {n} is not covered within radius {radius}"
        );
    }
}

#[test]
fn test_greedy_code_covers_small_lengths() {
    for n in 1..8 {
        let code = generate_cover_code(n, 0.25).unwrap();
        assert_covers(&code, n, n / 4);
    }
}

#[test]
fn test_concatenated_code_covers_multiples_of_four() {
    for n in [8, 12] {
        let code = generate_cover_code(n, 0.25).unwrap();
        assert_eq!(code.len(), 4usize.pow(n as u32 / 4));
        assert_covers(&code, n, n / 4);
    }
}

#[test]
fn test_truncated_code_covers_other_lengths() {
    for n in [9, 10, 11, 13] {
        let code = generate_cover_code(n, 0.25).unwrap();
        assert_covers(&code, n, n / 4);
    }
}

#[test]
fn test_codeword_lengths_match() {
    let code = generate_cover_code(10, 0.25).unwrap();
    assert!(code.iter().all(|codeword| codeword.len() == 10));
}

#[test]
fn test_unsupported_parameters_fail_fast() {
    assert!(matches!(
        generate_cover_code(9, 0.5),
        Err(SatError::UnsupportedCoveringCode { n: 9, .. })
    ));
    // Below 8, any δ runs the greedy construction.
    assert!(generate_cover_code(5, 0.5).is_ok());
}

#[test]
fn test_base_code_has_radius_one() {
    let code = generate_cover_code(4, 0.25).unwrap();
    assert_covers(&code, 4, 1);
}
