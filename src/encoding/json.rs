//! JSON serialization of instances.
//!
//! An instance serializes as its clause lists: `[[1,2],[-2,3]]`.
//! Deserialization runs the usual construction-time validation.

use crate::error::{Result, SatError};
use crate::instance::Instance;

/// Serialize an instance to a JSON document.
pub fn write_instance_json(instance: &Instance) -> Result<String> {
    serde_json::to_string(instance)
        .map_err(|error| SatError::ParseError(format!("failed to write JSON: {error}")))
}

/// Deserialize an instance from a JSON document.
pub fn read_instance_json(input: &str) -> Result<Instance> {
    serde_json::from_str(input)
        .map_err(|error| SatError::ParseError(format!("failed to read JSON: {error}")))
}

#[cfg(test)]
#[path = "../unit_tests/encoding/json.rs"]
mod tests;
