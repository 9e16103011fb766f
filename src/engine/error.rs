//! Errors at the edges of the engine: key parsing and builder validation.

use thiserror::Error;

/// Errors that can occur when turning a control label into a [`super::Key`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum KeyError {
    #[error("Unknown key label '{0}'")]
    UnknownLabel(String),

    #[error("Digit {0} is out of range, expected 0-9")]
    DigitOutOfRange(u8),
}

/// Errors that can occur when building a calculator from explicit parts.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Display '{0}' is not a numeric literal")]
    InvalidDisplay(String),

    #[error("Pending operator set without an accumulator. Call .accumulator(value)")]
    MissingAccumulator,
}
