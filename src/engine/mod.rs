//! Stateful command surface of the calculator.
//!
//! This module is the shell around [`crate::core`]: it owns an
//! [`EngineState`](crate::core::EngineState) and mutates it in response to
//! keypad commands.
//!
//! # Key Concepts
//!
//! - **Calculator**: owned engine, one per widget; commands never fail
//! - **Key**: one value per keypad control, parsed from button labels
//! - **Builder**: configured construction with validation
//!
//! Calls must be serialized by the host; the engine holds no locks.

mod builder;
pub mod error;
mod key;
mod machine;

pub use builder::CalculatorBuilder;
pub use error::{BuildError, KeyError};
pub use key::Key;
pub use machine::{Calculator, Operation};
