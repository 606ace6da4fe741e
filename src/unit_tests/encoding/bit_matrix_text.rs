use super::*;
use crate::error::SatError;
use crate::instance::Instance;

#[test]
fn test_parse_example() {
    let instance = parse_bit_matrix("101000\n000110").unwrap();
    assert_eq!(
        instance,
        Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap()
    );
}

#[test]
fn test_write_round_trip() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    let text = write_bit_matrix(&instance).unwrap();
    assert_eq!(text, "101000\n000110\n");
    assert_eq!(parse_bit_matrix(&text).unwrap(), instance);
}

#[test]
fn test_invalid_characters_are_rejected() {
    assert!(matches!(
        parse_bit_matrix("10x0"),
        Err(SatError::ParseError(_))
    ));
}

#[test]
fn test_unequal_line_lengths_are_rejected() {
    assert!(matches!(
        parse_bit_matrix("1010\n10"),
        Err(SatError::ParseError(_))
    ));
}

#[test]
fn test_odd_line_length_is_rejected() {
    assert!(matches!(
        parse_bit_matrix("101"),
        Err(SatError::ParseError(_))
    ));
}

#[test]
fn test_empty_input_is_rejected() {
    assert!(matches!(parse_bit_matrix(""), Err(SatError::ParseError(_))));
}

#[test]
fn test_write_fails_for_empty_clause() {
    let instance = Instance::from_literals([vec![]]).unwrap();
    assert!(write_bit_matrix(&instance).is_err());
}
