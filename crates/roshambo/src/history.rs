//! Record of recently played rounds.

use std::collections::VecDeque;
use std::fmt;

use crate::gesture::Gesture;
use crate::outcome::Outcome;

/// One resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub user: Gesture,
    pub computer: Gesture,
    pub outcome: Outcome,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You: {} vs PC: {} - {}",
            self.user, self.computer, self.outcome
        )
    }
}

/// A bounded, newest-first log of [`HistoryEntry`]s.
///
/// When full, recording a new entry evicts the oldest one.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    recorded: u64,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl HistoryLog {
    pub const DEFAULT_CAPACITY: usize = 5;

    /// Creates an empty log holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be non-zero");
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            recorded: 0,
        }
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
        self.recorded += 1;
    }

    /// Iterates over the entries, newest first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of entries ever recorded, including evicted ones.
    pub fn recorded(&self) -> u64 {
        self.recorded
    }
}
