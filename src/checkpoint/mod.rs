//! Checkpoint and restore for calculator engines.
//!
//! A checkpoint captures the full [`EngineState`], memory and history
//! included, so a widget can be torn down and recreated without losing the
//! user's computation. JSON is provided for readability, bincode for
//! compactness and for states holding non-finite values.
//!
//! # Example
//!
//! ```rust
//! use calcpad::checkpoint::Checkpoint;
//! use calcpad::core::Operator;
//! use calcpad::engine::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.input_digit(6);
//! calc.perform_operation(Operator::Mul);
//!
//! let json = Checkpoint::capture(&calc).to_json().unwrap();
//! let mut restored = Checkpoint::from_json(&json).unwrap().restore().unwrap();
//!
//! restored.input_digit(7);
//! restored.press(calcpad::engine::Key::Equals);
//! assert_eq!(restored.display(), "42");
//! ```

use crate::core::{number, EngineState};
use crate::engine::Calculator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::{CheckpointError, StateViolation};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a calculator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Complete engine state
    pub state: EngineState,
}

impl Checkpoint {
    /// Snapshot the calculator's current state.
    pub fn capture(calculator: &Calculator) -> Self {
        let checkpoint = Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state: calculator.state().clone(),
        };
        debug!(
            id = %checkpoint.id,
            entries = checkpoint.state.history.len(),
            "captured checkpoint"
        );
        checkpoint
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// Fails with [`CheckpointError::NonFiniteValues`] when the state holds
    /// NaN or an infinity; use [`Checkpoint::to_binary`] for such states.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        let fields = self.state.non_finite_fields();
        if !fields.is_empty() {
            return Err(CheckpointError::NonFiniteValues { fields });
        }
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// Serialize with bincode. Non-finite values are preserved.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// Validate the captured state and rebuild a calculator from it.
    ///
    /// All violations are reported together.
    pub fn restore(self) -> Result<Calculator, CheckpointError> {
        match validate_state(&self.state) {
            Validation::Success(()) => {
                debug!(id = %self.id, "restored checkpoint");
                Ok(Calculator::from_state(self.state))
            }
            Validation::Failure(violations) => Err(CheckpointError::ValidationFailed(violations)),
        }
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version == CHECKPOINT_VERSION {
            Ok(())
        } else {
            Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            })
        }
    }
}

/// Check a state for every inconsistency at once.
///
/// Returns `Validation::Success(())` if the state could have been produced
/// by the engine's commands, otherwise `Validation::Failure` with ALL
/// violations found.
pub fn validate_state(state: &EngineState) -> Validation<(), Vec<StateViolation>> {
    let mut violations = Vec::new();
    let display = &state.display;

    if display.matches('.').count() > 1 {
        violations.push(StateViolation::MultipleDecimalPoints(display.clone()));
    } else if !number::is_literal(display) && !number::is_sentinel(display) {
        violations.push(StateViolation::UnparseableDisplay(display.clone()));
    }

    if let (Some(op), None) = (state.pending_operator, state.accumulator) {
        violations.push(StateViolation::PendingWithoutAccumulator(op.to_string()));
    }

    if violations.is_empty() {
        Validation::Success(())
    } else {
        Validation::Failure(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;
    use crate::engine::Operation;

    fn sample_calculator() -> Calculator {
        let mut calc = Calculator::new();
        calc.input_digit(3);
        calc.perform_operation(Operator::Add);
        calc.input_digit(4);
        calc.perform_operation(Operator::Mul);
        calc.input_digit(2);
        calc.memory_add();
        calc
    }

    #[test]
    fn capture_stamps_version_and_id() {
        let first = Checkpoint::capture(&Calculator::new());
        let second = Checkpoint::capture(&Calculator::new());

        assert_eq!(first.version, CHECKPOINT_VERSION);
        assert_ne!(first.id, second.id);
        assert!(Uuid::parse_str(&first.id).is_ok());
    }

    #[test]
    fn json_round_trip_restores_behavior() {
        let calc = sample_calculator();
        let json = Checkpoint::capture(&calc).to_json().unwrap();

        let mut restored = Checkpoint::from_json(&json).unwrap().restore().unwrap();
        assert_eq!(restored.display(), "2");
        assert_eq!(restored.accumulator(), Some(7.0));
        assert_eq!(restored.pending_operator(), Some(Operator::Mul));
        assert_eq!(restored.memory(), 2.0);
        assert_eq!(restored.history().transcript(), vec!["3 + 4 = 7"]);

        restored.perform_operation(Operation::Equals);
        assert_eq!(restored.display(), "14");
    }

    #[test]
    fn json_refuses_non_finite_state() {
        let mut calc = Calculator::new();
        calc.input_digit(1);
        calc.perform_operation(Operator::Div);
        calc.input_digit(0);
        calc.perform_operation(Operation::Equals);

        let result = Checkpoint::capture(&calc).to_json();
        match result {
            Err(CheckpointError::NonFiniteValues { fields }) => {
                assert!(fields.contains(&"accumulator".to_string()));
                assert!(fields.contains(&"history[0].result".to_string()));
            }
            other => panic!("Expected NonFiniteValues, got {:?}", other),
        }
    }

    #[test]
    fn binary_round_trip_preserves_non_finite_values() {
        let mut calc = Calculator::new();
        calc.input_digit(1);
        calc.perform_operation(Operator::Div);
        calc.input_digit(0);
        calc.perform_operation(Operation::Equals);
        calc.memory_add();

        let bytes = Checkpoint::capture(&calc).to_binary().unwrap();
        let restored = Checkpoint::from_binary(&bytes).unwrap().restore().unwrap();

        assert_eq!(restored.display(), "Infinity");
        assert_eq!(restored.memory(), f64::INFINITY);
        assert_eq!(restored.history().len(), 1);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut checkpoint = Checkpoint::capture(&Calculator::new());
        checkpoint.version = 99;
        let json = serde_json::to_string(&checkpoint).unwrap();

        let result = Checkpoint::from_json(&json);
        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion {
                found: 99,
                supported: CHECKPOINT_VERSION
            })
        ));
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        let result = Checkpoint::from_json("{ not json");
        assert!(matches!(
            result,
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn truncated_binary_is_a_deserialization_error() {
        let bytes = Checkpoint::capture(&sample_calculator()).to_binary().unwrap();
        let result = Checkpoint::from_binary(&bytes[..bytes.len() / 2]);
        assert!(matches!(
            result,
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn restore_accumulates_all_violations() {
        let mut checkpoint = Checkpoint::capture(&Calculator::new());
        checkpoint.state.display = "1.2.3".to_string();
        checkpoint.state.pending_operator = Some(Operator::Sub);
        checkpoint.state.accumulator = None;

        match checkpoint.restore() {
            Err(CheckpointError::ValidationFailed(violations)) => {
                assert_eq!(violations.len(), 2);
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, StateViolation::MultipleDecimalPoints(_))));
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, StateViolation::PendingWithoutAccumulator(_))));
            }
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn validation_error_message_lists_violations() {
        let err = CheckpointError::ValidationFailed(vec![
            StateViolation::UnparseableDisplay("abc".to_string()),
            StateViolation::PendingWithoutAccumulator("+".to_string()),
        ]);
        assert_eq!(
            err.to_string(),
            "Checkpoint validation failed: display 'abc' is not a number; \
             pending operator '+' has no accumulator"
        );
    }

    #[test]
    fn validate_state_accepts_engine_states() {
        let calc = sample_calculator();
        assert!(matches!(
            validate_state(calc.state()),
            Validation::Success(())
        ));

        let sentinel = EngineState {
            display: "NaN".to_string(),
            ..EngineState::default()
        };
        assert!(matches!(validate_state(&sentinel), Validation::Success(())));
    }

    #[test]
    fn validate_state_rejects_garbage_display() {
        let state = EngineState {
            display: "12abc".to_string(),
            ..EngineState::default()
        };
        match validate_state(&state) {
            Validation::Failure(violations) => {
                assert_eq!(
                    violations,
                    vec![StateViolation::UnparseableDisplay("12abc".to_string())]
                );
            }
            Validation::Success(_) => panic!("Expected failure, got success"),
        }
    }
}
