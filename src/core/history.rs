// File: src/core/history.rs
use chrono::Local;
use serde::Serialize;
use std::collections::VecDeque;

/// `YYYY-MM-DD HH:MM:SS`, local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One audited action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub action: String,
}

/// Log of mutating actions, most recent first.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    /// Front is the top of the stack.
    entries: VecDeque<HistoryEntry>,
}

pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

impl HistoryStack {
    pub fn new() -> Self {
        Self { entries: VecDeque::new() }
    }

    /// Stamps `action` with the current wall-clock time and puts it on top.
    pub fn push(&mut self, action: impl Into<String>) {
        self.push_loaded(current_timestamp(), action);
    }

    /// Puts an entry with a caller-supplied timestamp on top. Used when restoring a file.
    pub fn push_loaded(&mut self, timestamp: impl Into<String>, action: impl Into<String>) {
        self.entries.push_front(HistoryEntry {
            timestamp: timestamp.into(),
            action: action.into(),
        });
    }

    /// Most recent first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
