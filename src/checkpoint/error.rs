//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// JSON has no representation for NaN or infinities
    #[error("Non-finite values cannot be written as JSON: {}", .fields.join(", "))]
    NonFiniteValues { fields: Vec<String> },

    /// Checkpoint version is not supported by this version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Checkpoint state failed validation
    #[error("Checkpoint validation failed: {}", join(.0))]
    ValidationFailed(Vec<StateViolation>),
}

/// One inconsistency found in a restored engine state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StateViolation {
    #[error("display '{0}' contains more than one decimal point")]
    MultipleDecimalPoints(String),

    #[error("display '{0}' is not a number")]
    UnparseableDisplay(String),

    #[error("pending operator '{0}' has no accumulator")]
    PendingWithoutAccumulator(String),
}

fn join(violations: &[StateViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
