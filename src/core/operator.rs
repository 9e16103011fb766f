//! Binary operators understood by the engine.
//!
//! The application table is a single exhaustive `match`, so adding an
//! operator without defining its arithmetic is a compile error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four keypad operators.
///
/// # Example
///
/// ```rust
/// use calcpad::core::Operator;
///
/// assert_eq!(Operator::Add.apply(3.0, 4.0), 7.0);
/// assert_eq!(Operator::Mul.symbol(), '×');
/// assert_eq!(Operator::from_symbol('/'), Some(Operator::Div));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Apply the operator to two operands.
    ///
    /// Division follows IEEE-754: a zero divisor yields an infinity of the
    /// dividend's sign, or NaN for `0 / 0`.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }

    /// Symbol shown on the key face.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '×',
            Self::Div => '÷',
        }
    }

    /// Name for logging.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mul => "Mul",
            Self::Div => "Div",
        }
    }

    /// Resolve a key-face or keyboard symbol.
    ///
    /// Accepts the display symbols plus their ASCII stand-ins (`*`, `x`, `/`)
    /// and the typographic minus `−`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Sub),
            '×' | '*' | 'x' => Some(Self::Mul),
            '÷' | '/' => Some(Self::Div),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
