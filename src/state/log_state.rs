//! LogState - UI Activity Log with Ring Buffer

use chrono::{DateTime, Local};
use std::collections::VecDeque;

use crate::theme::colors::CatalogColors;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            LogLevel::Info => CatalogColors::success(),
            LogLevel::Warn => CatalogColors::warning(),
            LogLevel::Error => CatalogColors::danger(),
            LogLevel::Debug => CatalogColors::text_muted(),
        }
    }
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// Recent UI events, oldest dropped first
#[derive(Debug)]
pub struct LogState {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_id: u64,
}

impl LogState {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    pub fn push(&mut self, level: LogLevel, message: impl Into<String>, timestamp: DateTime<Local>) {
        let entry = LogEntry {
            id: self.next_id,
            level,
            message: message.into(),
            timestamp,
        };
        self.next_id += 1;

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Push an entry stamped with the current time
    pub fn push_now(&mut self, level: LogLevel, message: impl Into<String>) {
        self.push(level, message, Local::now());
    }

    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    /// Newest entries first, at most `limit`
    pub fn latest(&self, limit: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev().take(limit)
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

impl Default for LogState {
    fn default() -> Self {
        Self::new(crate::constants::LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut logs = LogState::new(2);
        logs.push_now(LogLevel::Info, "one");
        logs.push_now(LogLevel::Warn, "two");
        logs.push_now(LogLevel::Error, "three");

        assert_eq!(logs.len(), 2);
        let messages: Vec<_> = logs.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
        assert_eq!(logs.entries().back().map(|e| e.id), Some(3));
    }

    #[test]
    fn test_latest_is_newest_first() {
        let mut logs = LogState::default();
        for i in 0..5 {
            logs.push_now(LogLevel::Debug, format!("entry {i}"));
        }
        let latest: Vec<_> = logs.latest(2).map(|e| e.message.clone()).collect();
        assert_eq!(latest, vec!["entry 4", "entry 3"]);

        logs.clear();
        assert!(logs.is_empty());
    }
}
