//! Keypad Session
//!
//! This example drives the engine the way a widget would: each button label
//! becomes one `Key`, and the readout is re-read after every press.
//!
//! Key concepts:
//! - Labels map one-to-one onto engine commands
//! - Operators chain left to right with no precedence
//! - Memory and history survive `AC`
//! - Checkpoints carry a session across a widget reload
//!
//! Run with: RUST_LOG=calcpad=debug cargo run --example keypad_session

use calcpad::checkpoint::Checkpoint;
use calcpad::{Calculator, Key};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Keypad Session Example ===\n");

    let session = [
        "3", "+", "4", "×", "2", "=", "M+", "AC", "1", "0", "÷", "0", "=", "AC", "MR", "%",
    ];

    let mut calc = Calculator::new();
    for label in session {
        let key: Key = match label.parse() {
            Ok(key) => key,
            Err(e) => {
                eprintln!("  skipping: {}", e);
                continue;
            }
        };
        let state = calc.press(key);
        let indicator = if state.has_memory() { "M" } else { " " };
        println!("  [{:>3}]  {} {:>12}", key.label(), indicator, state.display);
    }

    println!("\nTranscript:");
    for line in calc.history().transcript() {
        println!("  {}", line);
    }

    println!("\nReloading widget from a checkpoint...");
    let restored = Checkpoint::capture(&calc)
        .to_binary()
        .and_then(|bytes| Checkpoint::from_binary(&bytes))
        .and_then(Checkpoint::restore);

    match restored {
        Ok(restored) => {
            println!("  display: {}", restored.display());
            println!("  memory:  {}", restored.memory());
            println!("  history: {} entries", restored.history().len());
        }
        Err(e) => eprintln!("  restore failed: {}", e),
    }

    println!("\n=== Example Complete ===");
}
