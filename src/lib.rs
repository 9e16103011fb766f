//! Calcpad: the calculation engine behind a keypad calculator widget
//!
//! Calcpad turns discrete keypad input (digits, operators, memory and clear
//! commands) into a display value, an accumulator and a transcript of
//! completed operations. Rendering and input handling belong to the host;
//! the host maps each control to one engine command and re-reads the state
//! after every call.
//!
//! # Core Concepts
//!
//! - **Engine state**: plain, serializable data read by the presentation layer
//! - **Operators**: exhaustive `Add | Sub | Mul | Div` application table
//! - **Chaining**: operators resolve left to right as they are pressed
//! - **History**: append-only log of resolved operations
//! - **Checkpoints**: snapshot and restore of a complete engine
//!
//! # Example
//!
//! ```rust
//! use calcpad::{Calculator, Key, Operator};
//!
//! let mut calc = Calculator::new();
//! calc.press(Key::Digit(5));
//! calc.press(Key::Operator(Operator::Div));
//! calc.press(Key::Digit(0));
//! calc.press(Key::Equals);
//!
//! // Division by zero degrades to a sentinel instead of failing.
//! assert_eq!(calc.display(), "Infinity");
//! assert_eq!(calc.history().transcript(), vec!["5 ÷ 0 = Infinity"]);
//! ```

pub mod checkpoint;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::checkpoint::{Checkpoint, CheckpointError};
pub use crate::core::{EngineState, History, HistoryEntry, Operator};
pub use crate::engine::{Calculator, CalculatorBuilder, Key, Operation};
