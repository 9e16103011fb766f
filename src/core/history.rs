//! Transcript of resolved operations.
//!
//! Entries are immutable once recorded and the log only grows.

use super::number::render;
use super::operator::Operator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Record of one resolved binary operation.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{HistoryEntry, Operator};
///
/// let entry = HistoryEntry::new(3.0, Operator::Add, 4.0, 7.0);
/// assert_eq!(entry.to_string(), "3 + 4 = 7");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Accumulated left-hand operand
    pub left: f64,
    /// Operator that was pending
    pub operator: Operator,
    /// Operand entered after the operator
    pub right: f64,
    /// Value the operation produced
    pub result: f64,
    /// When the operation was resolved
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(left: f64, operator: Operator, right: f64, result: f64) -> Self {
        Self {
            left,
            operator,
            right,
            result,
            recorded_at: Utc::now(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            render(self.left),
            self.operator,
            render(self.right),
            render(self.result)
        )
    }
}

/// Ordered, append-only log of resolved operations.
///
/// [`History::record`] is the only way to add to the log; nothing removes or
/// reorders entries.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{History, HistoryEntry, Operator};
///
/// let mut history = History::new();
/// history.record(HistoryEntry::new(3.0, Operator::Add, 4.0, 7.0));
/// history.record(HistoryEntry::new(7.0, Operator::Mul, 2.0, 14.0));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.transcript(), vec!["3 + 4 = 7", "7 × 2 = 14"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry to the end of the log.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// All entries in resolution order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently resolved operation.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Time between the first and last recorded entry.
    ///
    /// Returns `None` for an empty log.
    pub fn span(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            last.recorded_at
                .signed_duration_since(first.recorded_at)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    /// One transcript line per entry, oldest first.
    pub fn transcript(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
