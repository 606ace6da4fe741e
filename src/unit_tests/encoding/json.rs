use super::*;
use crate::error::SatError;
use crate::instance::Instance;

#[test]
fn test_instances_serialize_as_clause_lists() {
    let instance = Instance::from_literals([vec![1, 2], vec![-2, 3]]).unwrap();
    assert_eq!(write_instance_json(&instance).unwrap(), "[[1,2],[-2,3]]");
}

#[test]
fn test_round_trip() {
    let instance = Instance::from_literals([vec![1], vec![], vec![-1, 2]]).unwrap();
    let document = write_instance_json(&instance).unwrap();
    assert_eq!(read_instance_json(&document).unwrap(), instance);
}

#[test]
fn test_validation_runs_on_read() {
    // The clause [1, 0] fails instance validation.
    assert!(matches!(
        read_instance_json("[[1,0]]"),
        Err(SatError::ParseError(_))
    ));
    assert!(matches!(
        read_instance_json("not json"),
        Err(SatError::ParseError(_))
    ));
}
