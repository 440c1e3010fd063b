//! Append-only action log.
//!
//! The log is the engine's only reporting channel: every selection,
//! damage roll, effect, defeat, draw, and error is written here as a
//! human-readable line. Lines are never removed during a game; the log is
//! only replaced wholesale by game start or reset.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Ordered sequence of human-readable event lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLog {
    lines: Vector<String>,
}

impl ActionLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log holding a single seed line.
    #[must_use]
    pub fn seeded(line: impl Into<String>) -> Self {
        let mut log = Self::new();
        log.push(line);
        log
    }

    /// Append a line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    /// Append every line from another batch, in order.
    pub fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Most recent line.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    /// Iterate over lines, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.lines.iter().map(String::as_str)
    }

    /// Whether any line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.iter().any(|line| line.contains(needle))
    }

    /// Lines appended since the log had `len` lines.
    pub fn since(&self, len: usize) -> impl Iterator<Item = &str> {
        self.iter().skip(len)
    }

    /// Copy the lines out.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_only() {
        let mut log = ActionLog::seeded("Game started!");
        log.push("first");
        log.extend(vec!["second".to_string(), "third".to_string()]);

        assert_eq!(log.len(), 4);
        assert_eq!(log.last(), Some("third"));
        assert_eq!(log.since(2).collect::<Vec<_>>(), vec!["second", "third"]);
    }

    #[test]
    fn test_iter_both_ends() {
        let mut log = ActionLog::seeded("a");
        log.push("b");
        log.push("c");

        assert_eq!(log.iter().len(), 3);
        assert_eq!(log.iter().rev().collect::<Vec<_>>(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_contains() {
        let log = ActionLog::seeded("Rookie Warrior deals 0 damage to Slime!");
        assert!(log.contains("0 damage"));
        assert!(!log.contains("CRITICAL"));
    }
}
