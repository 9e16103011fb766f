//! Core calculator types.
//!
//! This module contains the pure building blocks of the engine:
//! - The `Operator` enum and its application table
//! - Display rendering and parsing
//! - The append-only operation history
//! - The `EngineState` snapshot
//!
//! Nothing here performs I/O; the stateful command surface lives in
//! [`crate::engine`].

mod history;
pub mod number;
mod operator;
mod state;

pub use history::{History, HistoryEntry};
pub use number::{parse, render};
pub use operator::Operator;
pub use state::EngineState;
