use std::collections::VecDeque;

use instant::Instant;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: Instant,
    pub message: String,
}

/// Bounded history of successful operations, newest first.
#[derive(Debug, Clone)]
pub struct OperationLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl OperationLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.push_at(Instant::now(), message);
    }

    /// Records `message`, evicting the oldest entry once over capacity.
    pub fn push_at(&mut self, at: Instant, message: impl Into<String>) {
        self.entries.push_front(LogEntry {
            at,
            message: message.into(),
        });
        self.entries.truncate(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_and_bounded() {
        let mut log = OperationLog::new(10);
        for i in 0..12 {
            log.push(format!("op {i}"));
        }
        assert_eq!(log.len(), 10);
        let messages: Vec<_> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages.first(), Some(&"op 11"));
        assert_eq!(messages.last(), Some(&"op 2"));
    }

    #[test]
    fn test_clear() {
        let mut log = OperationLog::new(3);
        log.push("a");
        log.clear();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
    }
}
