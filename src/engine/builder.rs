//! Builder for constructing calculators from explicit parts.

use super::error::BuildError;
use super::machine::Calculator;
use crate::core::{number, EngineState, History, Operator};

/// Builder for configuring a calculator with a fluent API.
///
/// Every setting is optional; unset fields take the pristine defaults of
/// [`Calculator::new`].
///
/// # Example
///
/// ```rust
/// use calcpad::engine::CalculatorBuilder;
///
/// let calc = CalculatorBuilder::new()
///     .memory(42.0)
///     .display("3.5")
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.memory(), 42.0);
/// assert_eq!(calc.display(), "3.5");
/// ```
#[derive(Debug, Default)]
pub struct CalculatorBuilder {
    display: Option<String>,
    accumulator: Option<f64>,
    pending_operator: Option<Operator>,
    awaiting_fresh_operand: bool,
    memory: f64,
    history: History,
}

impl CalculatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the readout text. Must be a numeric literal or a
    /// non-finite sentinel.
    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    /// Left-hand operand of a chain in progress.
    pub fn accumulator(mut self, value: f64) -> Self {
        self.accumulator = Some(value);
        self
    }

    /// Operator waiting for its right-hand operand. Requires an accumulator.
    pub fn pending_operator(mut self, op: Operator) -> Self {
        self.pending_operator = Some(op);
        self
    }

    pub fn awaiting_fresh_operand(mut self, awaiting: bool) -> Self {
        self.awaiting_fresh_operand = awaiting;
        self
    }

    /// Initial memory register value.
    pub fn memory(mut self, value: f64) -> Self {
        self.memory = value;
        self
    }

    /// Seed the transcript, e.g. with a log carried over from another engine.
    pub fn history(mut self, history: History) -> Self {
        self.history = history;
        self
    }

    /// Build the calculator.
    /// Returns an error if the parts are inconsistent.
    pub fn build(self) -> Result<Calculator, BuildError> {
        let display = self.display.unwrap_or_else(|| "0".to_string());

        if !number::is_literal(&display) && !number::is_sentinel(&display) {
            return Err(BuildError::InvalidDisplay(display));
        }

        if self.pending_operator.is_some() && self.accumulator.is_none() {
            return Err(BuildError::MissingAccumulator);
        }

        Ok(Calculator::from_state(EngineState {
            display,
            accumulator: self.accumulator,
            pending_operator: self.pending_operator,
            awaiting_fresh_operand: self.awaiting_fresh_operand,
            memory: self.memory,
            history: self.history,
        }))
    }
}
