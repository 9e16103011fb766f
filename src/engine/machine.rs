//! Calculator that applies keypad commands to its state.

use crate::core::{number, EngineState, History, HistoryEntry, Operator};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Argument to [`Calculator::perform_operation`]: an operator key or `=`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operation {
    /// Flush the pending operator and wait for the next operand
    Apply(Operator),
    /// Flush the pending operator and end the chain
    Equals,
}

impl From<Operator> for Operation {
    fn from(op: Operator) -> Self {
        Self::Apply(op)
    }
}

/// Keypad calculator engine.
///
/// Every command completes synchronously, never fails and returns the new
/// state. Operators are resolved strictly left to right as they are
/// pressed; there is no precedence.
///
/// # Example
///
/// ```rust
/// use calcpad::core::Operator;
/// use calcpad::engine::{Calculator, Operation};
///
/// let mut calc = Calculator::new();
/// calc.input_digit(3);
/// calc.perform_operation(Operator::Add);
/// calc.input_digit(4);
/// calc.perform_operation(Operator::Mul);
/// calc.input_digit(2);
/// calc.perform_operation(Operation::Equals);
///
/// assert_eq!(calc.display(), "14");
/// assert_eq!(calc.history().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: EngineState,
}

impl Calculator {
    /// Create an engine showing `0` with empty memory and history.
    pub fn new() -> Self {
        Self {
            state: EngineState::default(),
        }
    }

    /// Wrap an existing state without checking it.
    ///
    /// Callers restoring untrusted data go through
    /// [`crate::engine::CalculatorBuilder`] or [`crate::checkpoint`].
    pub(crate) fn from_state(state: EngineState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Numeric value of the display.
    pub fn value(&self) -> f64 {
        self.state.value()
    }

    pub fn accumulator(&self) -> Option<f64> {
        self.state.accumulator
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.state.pending_operator
    }

    pub fn is_awaiting_fresh_operand(&self) -> bool {
        self.state.awaiting_fresh_operand
    }

    pub fn memory(&self) -> f64 {
        self.state.memory
    }

    /// Whether an "M" indicator should be lit.
    pub fn has_memory(&self) -> bool {
        self.state.has_memory()
    }

    pub fn history(&self) -> &History {
        &self.state.history
    }

    /// Consume the engine, keeping its state.
    pub fn into_state(self) -> EngineState {
        self.state
    }

    /// Enter one decimal digit.
    ///
    /// Values above 9 are ignored.
    pub fn input_digit(&mut self, digit: u8) -> &EngineState {
        if digit > 9 {
            warn!(digit, "ignoring out-of-range digit");
            return &self.state;
        }
        let ch = char::from(b'0' + digit);
        let state = &mut self.state;

        if state.awaiting_fresh_operand {
            state.display = ch.to_string();
            state.awaiting_fresh_operand = false;
        } else if state.display == "0" || !number::is_literal(&state.display) {
            state.display = ch.to_string();
        } else {
            state.display.push(ch);
        }

        trace!(display = %state.display, "digit entered");
        &self.state
    }

    /// Enter the decimal point; ignored if the operand already has one.
    pub fn input_decimal_point(&mut self) -> &EngineState {
        let state = &mut self.state;

        if state.awaiting_fresh_operand {
            state.display = "0.".to_string();
            state.awaiting_fresh_operand = false;
        } else if !number::is_literal(&state.display) {
            state.display = "0.".to_string();
        } else if !state.display.contains('.') {
            state.display.push('.');
        }

        trace!(display = %state.display, "decimal point entered");
        &self.state
    }

    /// Negate the displayed value. Zero stays `0`.
    pub fn toggle_sign(&mut self) -> &EngineState {
        let negated = -self.state.value();
        self.state.display = number::render(negated);
        trace!(display = %self.state.display, "sign toggled");
        &self.state
    }

    /// Divide the displayed value by 100.
    pub fn input_percent(&mut self) -> &EngineState {
        let scaled = self.state.value() / 100.0;
        self.state.display = number::render(scaled);
        trace!(display = %self.state.display, "percent applied");
        &self.state
    }

    /// Press an operator key or `=`.
    ///
    /// With no operator pending the displayed value seeds the accumulator.
    /// Otherwise the pending operator is applied to the accumulator and the
    /// displayed value, the result is recorded in history and becomes both
    /// the accumulator and the display.
    pub fn perform_operation(&mut self, next: impl Into<Operation>) -> &EngineState {
        let next = next.into();
        let state = &mut self.state;
        let input = state.value();

        match (state.accumulator, state.pending_operator) {
            (Some(left), Some(op)) => {
                let result = op.apply(left, input);
                debug!(
                    operator = op.name(),
                    left,
                    right = input,
                    result,
                    "resolved pending operation"
                );
                state
                    .history
                    .record(HistoryEntry::new(left, op, input, result));
                state.accumulator = Some(result);
                state.display = number::render(result);
            }
            _ => {
                debug!(accumulator = input, "seeded chain");
                state.accumulator = Some(input);
            }
        }

        state.awaiting_fresh_operand = true;
        state.pending_operator = match next {
            Operation::Apply(op) => Some(op),
            Operation::Equals => None,
        };

        &self.state
    }

    /// Reset the computation. Memory and history are kept.
    pub fn clear_all(&mut self) -> &EngineState {
        let state = &mut self.state;
        state.display = "0".to_string();
        state.accumulator = None;
        state.pending_operator = None;
        state.awaiting_fresh_operand = false;
        debug!("cleared all");
        &self.state
    }

    /// Reset only the operand being entered.
    pub fn clear_entry(&mut self) -> &EngineState {
        self.state.display = "0".to_string();
        self.state.awaiting_fresh_operand = false;
        debug!("cleared entry");
        &self.state
    }

    /// `M+`: add the displayed value to memory.
    ///
    /// The displayed value is committed, so the next digit starts a new
    /// operand.
    pub fn memory_add(&mut self) -> &EngineState {
        self.state.memory += self.state.value();
        self.state.awaiting_fresh_operand = true;
        debug!(memory = self.state.memory, "memory add");
        &self.state
    }

    /// `M-`: subtract the displayed value from memory.
    pub fn memory_subtract(&mut self) -> &EngineState {
        self.state.memory -= self.state.value();
        self.state.awaiting_fresh_operand = true;
        debug!(memory = self.state.memory, "memory subtract");
        &self.state
    }

    /// `MR`: show the memory value as a fresh operand.
    pub fn memory_recall(&mut self) -> &EngineState {
        self.state.display = number::render(self.state.memory);
        self.state.awaiting_fresh_operand = true;
        debug!(memory = self.state.memory, "memory recall");
        &self.state
    }

    /// `MC`: reset memory to zero.
    pub fn memory_clear(&mut self) -> &EngineState {
        self.state.memory = 0.0;
        debug!("memory cleared");
        &self.state
    }
}
