//! Error types for the satkernel library.

use thiserror::Error;

/// Errors that can occur in the satkernel library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SatError {
    /// A clause contains the literal 0, which encodes no variable.
    #[error("invalid instance: clause {clause} contains a zero literal")]
    ZeroLiteral { clause: usize },

    /// A clause mentions the same literal twice.
    #[error("invalid instance: clause {clause} contains literal {literal} twice")]
    DuplicateLiteral { clause: usize, literal: i32 },

    /// Strict construction was requested but the variables do not form [1..n].
    #[error("invalid instance: variables do not form a contiguous range 1..={expected}")]
    NonContiguousVariables { expected: usize },

    /// A bit matrix row set does not describe a well-formed instance.
    #[error("invalid bit matrix: {0}")]
    MalformedBitMatrix(String),

    /// The bit matrix is undefined for formulas with empty clauses or no variables.
    #[error("bit matrix unavailable: {0}")]
    BitMatrixUnavailable(String),

    /// The Lovász Local Lemma check needs all clauses to share one length.
    #[error("Lovász Local Lemma not applicable: clause lengths are not uniform")]
    LllNotApplicable,

    /// An external text format could not be parsed.
    #[error("parse error: {0}")]
    ParseError(String),

    /// Covering-code construction is only defined for n < 8 or δ = 0.25.
    #[error("unsupported covering code: n = {n}, delta = {delta}")]
    UnsupportedCoveringCode { n: usize, delta: f64 },

    /// A solver with a restricted input domain was fed a formula outside it.
    #[error("unsupported instance: {0}")]
    UnsupportedInstance(String),
}

/// Result type alias for satkernel operations.
pub type Result<T> = std::result::Result<T, SatError>;
