//! Keypad controls as data.
//!
//! A presentation layer maps each button to exactly one [`Key`] and hands it
//! to [`Calculator::press`]. Labels parse with `str::parse`, so a host can
//! drive the engine from button captions or keyboard input.

use super::error::KeyError;
use super::machine::{Calculator, Operation};
use crate::core::{EngineState, Operator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One keypad control.
///
/// # Example
///
/// ```rust
/// use calcpad::engine::{Calculator, Key};
///
/// let keys: Vec<Key> = ["1", "2", "÷", "4", "="]
///     .iter()
///     .map(|label| label.parse().unwrap())
///     .collect();
///
/// let mut calc = Calculator::new();
/// calc.press_all(keys);
/// assert_eq!(calc.display(), "3");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Key {
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    ClearAll,
    ClearEntry,
    ToggleSign,
    Percent,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
}

impl Key {
    /// Digit key, rejecting values above 9.
    pub fn digit(value: u8) -> Result<Self, KeyError> {
        if value <= 9 {
            Ok(Self::Digit(value))
        } else {
            Err(KeyError::DigitOutOfRange(value))
        }
    }

    /// Canonical caption for the key face.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::ClearAll => "AC".to_string(),
            Self::ClearEntry => "C".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percent => "%".to_string(),
            Self::MemoryClear => "MC".to_string(),
            Self::MemoryRecall => "MR".to_string(),
            Self::MemoryAdd => "M+".to_string(),
            Self::MemorySubtract => "M-".to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let key = match label {
            "." => Self::DecimalPoint,
            "=" | "\n" | "\r" => Self::Equals,
            "AC" => Self::ClearAll,
            "C" | "CE" => Self::ClearEntry,
            "±" | "+/-" => Self::ToggleSign,
            "%" => Self::Percent,
            "MC" => Self::MemoryClear,
            "MR" => Self::MemoryRecall,
            "M+" => Self::MemoryAdd,
            "M-" | "M−" => Self::MemorySubtract,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Self::Digit(c as u8 - b'0'),
                    (Some(c), None) => Operator::from_symbol(c)
                        .map(Self::Operator)
                        .ok_or_else(|| KeyError::UnknownLabel(other.to_string()))?,
                    _ => return Err(KeyError::UnknownLabel(other.to_string())),
                }
            }
        };
        Ok(key)
    }
}

impl Calculator {
    /// Dispatch one key to its command.
    pub fn press(&mut self, key: Key) -> &EngineState {
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::DecimalPoint => self.input_decimal_point(),
            Key::Operator(op) => self.perform_operation(op),
            Key::Equals => self.perform_operation(Operation::Equals),
            Key::ClearAll => self.clear_all(),
            Key::ClearEntry => self.clear_entry(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.input_percent(),
            Key::MemoryClear => self.memory_clear(),
            Key::MemoryRecall => self.memory_recall(),
            Key::MemoryAdd => self.memory_add(),
            Key::MemorySubtract => self.memory_subtract(),
        }
    }

    /// Dispatch keys in order, as a host draining an input queue would.
    pub fn press_all<I>(&mut self, keys: I) -> &EngineState
    where
        I: IntoIterator<Item = Key>,
    {
        for key in keys {
            self.press(key);
        }
        self.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_keys() -> Vec<Key> {
        let mut keys: Vec<Key> = (0..=9).map(Key::Digit).collect();
        keys.extend(Operator::ALL.iter().copied().map(Key::Operator));
        keys.extend([
            Key::DecimalPoint,
            Key::Equals,
            Key::ClearAll,
            Key::ClearEntry,
            Key::ToggleSign,
            Key::Percent,
            Key::MemoryClear,
            Key::MemoryRecall,
            Key::MemoryAdd,
            Key::MemorySubtract,
        ]);
        keys
    }

    #[test]
    fn every_label_parses_back() {
        for key in all_keys() {
            assert_eq!(key.label().parse::<Key>(), Ok(key), "label {}", key);
        }
    }

    #[test]
    fn keyboard_aliases_parse() {
        assert_eq!("*".parse::<Key>(), Ok(Key::Operator(Operator::Mul)));
        assert_eq!("/".parse::<Key>(), Ok(Key::Operator(Operator::Div)));
        assert_eq!("+/-".parse::<Key>(), Ok(Key::ToggleSign));
        assert_eq!("CE".parse::<Key>(), Ok(Key::ClearEntry));
        assert_eq!("\n".parse::<Key>(), Ok(Key::Equals));
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(
            "sin".parse::<Key>(),
            Err(KeyError::UnknownLabel("sin".to_string()))
        );
        assert_eq!(
            "^".parse::<Key>(),
            Err(KeyError::UnknownLabel("^".to_string()))
        );
        assert!("".parse::<Key>().is_err());
        assert!("12".parse::<Key>().is_err());
    }

    #[test]
    fn digit_constructor_checks_range() {
        assert_eq!(Key::digit(9), Ok(Key::Digit(9)));
        assert_eq!(Key::digit(10), Err(KeyError::DigitOutOfRange(10)));
    }

    #[test]
    fn press_dispatches_to_commands() {
        let mut calc = Calculator::new();
        calc.press(Key::Digit(5));
        calc.press(Key::MemoryAdd);
        calc.press(Key::Operator(Operator::Mul));
        calc.press(Key::Digit(2));
        calc.press(Key::Equals);

        assert_eq!(calc.display(), "10");
        assert_eq!(calc.memory(), 5.0);
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn press_all_replays_labels() {
        let keys: Vec<Key> = ["7", "M+", "3", "M+", "AC", "MR"]
            .iter()
            .map(|l| l.parse().unwrap())
            .collect();

        let mut calc = Calculator::new();
        let state = calc.press_all(keys);
        assert_eq!(state.display, "10");
    }

    #[test]
    fn key_serializes_correctly() {
        let json = serde_json::to_string(&Key::Operator(Operator::Sub)).unwrap();
        let deserialized: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Key::Operator(Operator::Sub));
    }
}
