//! External text formats for CNF instances.
//!
//! Parsers validate strictly and surface failures as
//! [`SatError::ParseError`]; writers emit the canonical form of each
//! format.
//!
//! [`SatError::ParseError`]: crate::error::SatError::ParseError

mod bit_matrix_text;
mod dimacs;
mod json;

pub use bit_matrix_text::{parse_bit_matrix, write_bit_matrix};
pub use dimacs::{parse_dimacs, write_dimacs};
pub use json::{read_instance_json, write_instance_json};
