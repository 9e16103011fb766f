//! Observable engine state.
//!
//! `EngineState` is plain data: every field is readable by the presentation
//! layer, and the whole value serializes for checkpoints.

use super::history::History;
use super::number;
use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Snapshot of everything the engine tracks.
///
/// # Example
///
/// ```rust
/// use calcpad::core::EngineState;
///
/// let state = EngineState::default();
/// assert_eq!(state.display, "0");
/// assert!(state.accumulator.is_none());
/// assert!(!state.is_chaining());
/// assert_eq!(state.memory, 0.0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineState {
    /// Text currently shown on the readout
    pub display: String,
    /// Left-hand operand of the chain in progress
    pub accumulator: Option<f64>,
    /// Operator waiting for its right-hand operand
    pub pending_operator: Option<Operator>,
    /// Next digit starts a new number instead of extending the display
    pub awaiting_fresh_operand: bool,
    /// Memory register
    pub memory: f64,
    /// Resolved operations, oldest first
    pub history: History,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: None,
            pending_operator: None,
            awaiting_fresh_operand: false,
            memory: 0.0,
            history: History::new(),
        }
    }
}

impl EngineState {
    /// Numeric value of the display.
    pub fn value(&self) -> f64 {
        number::parse(&self.display)
    }

    /// Whether an operator is waiting for its right-hand operand.
    pub fn is_chaining(&self) -> bool {
        self.pending_operator.is_some()
    }

    /// Whether the memory register holds a non-zero value.
    pub fn has_memory(&self) -> bool {
        self.memory != 0.0
    }

    /// Names of numeric fields holding NaN or an infinity.
    ///
    /// History entries are reported by index, e.g. `history[2].result`.
    pub fn non_finite_fields(&self) -> Vec<String> {
        let mut fields = Vec::new();
        if let Some(acc) = self.accumulator {
            if !acc.is_finite() {
                fields.push("accumulator".to_string());
            }
        }
        if !self.memory.is_finite() {
            fields.push("memory".to_string());
        }
        for (i, entry) in self.history.iter().enumerate() {
            for (name, value) in [
                ("left", entry.left),
                ("right", entry.right),
                ("result", entry.result),
            ] {
                if !value.is_finite() {
                    fields.push(format!("history[{i}].{name}"));
                }
            }
        }
        fields
    }
}
