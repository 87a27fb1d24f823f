//! Bounded roll history, newest entry first.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Default number of descriptions kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// A rolling log of roll descriptions. The oldest entry is dropped once
/// the limit is reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollHistory {
    entries: VecDeque<String>,
    limit: usize,
}

impl Default for RollHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl RollHistory {
    /// Create an empty history with the default limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history keeping at most `limit` entries (minimum 1).
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Record a description as the newest entry.
    pub fn push(&mut self, description: impl Into<String>) {
        self.entries.push_front(description.into());
        self.entries.truncate(self.limit);
    }

    /// Entries from newest to oldest.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first() {
        let mut h = RollHistory::new();
        h.push("first");
        h.push("second");
        assert_eq!(h.latest(), Some("second"));
        assert_eq!(h.entries().collect::<Vec<_>>(), vec!["second", "first"]);
    }

    #[test]
    fn evicts_oldest_past_limit() {
        let mut h = RollHistory::new();
        for i in 0..25 {
            h.push(format!("roll {i}"));
        }
        assert_eq!(h.len(), 20);
        assert_eq!(h.latest(), Some("roll 24"));
        assert_eq!(h.entries().last(), Some("roll 5"));
    }

    #[test]
    fn custom_limit() {
        let mut h = RollHistory::with_limit(2);
        h.push("a");
        h.push("b");
        h.push("c");
        assert_eq!(h.entries().collect::<Vec<_>>(), vec!["c", "b"]);
        assert_eq!(RollHistory::with_limit(0).limit(), 1);
    }

    #[test]
    fn clear() {
        let mut h = RollHistory::new();
        h.push("a");
        h.clear();
        assert!(h.is_empty());
        assert_eq!(h.latest(), None);
    }
}
