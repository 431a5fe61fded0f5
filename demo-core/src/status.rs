use egui_dsviz::{Severity, Status};
use std::collections::VecDeque;
use web_time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Danger,
}

impl From<Severity> for StatusKind {
    fn from(s: Severity) -> Self {
        match s {
            Severity::Info => StatusKind::Info,
            Severity::Success => StatusKind::Success,
            Severity::Warning => StatusKind::Warning,
            Severity::Danger => StatusKind::Danger,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMsg {
    pub kind: StatusKind,
    pub text: String,
    pub at: Instant,
    pub timeout_ms: u128,
}

impl StatusMsg {
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.at).as_millis() > self.timeout_ms
    }
}

/// Toasts shown over the diagram, each with its own timeout.
#[derive(Default)]
pub struct StatusQueue {
    q: VecDeque<StatusMsg>,
}

impl StatusQueue {
    pub fn new() -> Self {
        Self { q: VecDeque::new() }
    }

    pub fn clear(&mut self) {
        self.q.clear();
    }

    pub fn push_custom(&mut self, kind: StatusKind, text: impl Into<String>, timeout_ms: u128) {
        self.q.push_back(StatusMsg {
            kind,
            text: text.into(),
            at: Instant::now(),
            timeout_ms,
        });
    }

    /// Warnings stay up a little longer than confirmations.
    pub fn push(&mut self, status: &Status) {
        let kind = StatusKind::from(status.severity);
        let timeout = match kind {
            StatusKind::Info => 3000,
            StatusKind::Success => 3500,
            StatusKind::Warning | StatusKind::Danger => 4000,
        };
        self.push_custom(kind, status.message.clone(), timeout);
    }

    pub fn retain_active(&mut self) {
        self.retain_active_now(Instant::now());
    }

    pub fn retain_active_now(&mut self, now: Instant) {
        self.q.retain(|m| !m.is_expired_at(now));
    }

    /// Latest non-expired message (the most recent one).
    pub fn latest(&self) -> Option<&StatusMsg> {
        self.q.back()
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeouts_and_latest() {
        let mut sq = StatusQueue::new();
        sq.push(&Status::info("Running DFS from 0"));
        sq.push(&Status::warning("Stack is empty"));

        let now = Instant::now() + core::time::Duration::from_millis(3500);
        sq.retain_active_now(now);

        // info (3000ms) is gone, the warning remains
        assert_eq!(sq.len(), 1);
        let latest = sq.latest().unwrap();
        assert_eq!(latest.kind, StatusKind::Warning);
        assert_eq!(latest.text, "Stack is empty");

        sq.retain_active_now(now + core::time::Duration::from_millis(1000));
        assert!(sq.is_empty());
    }

    #[test]
    fn test_clear_empties_queue() {
        let mut sq = StatusQueue::new();
        assert!(sq.is_empty());
        sq.push(&Status::success("Pushed 4 onto stack"));
        assert!(!sq.is_empty());
        sq.clear();
        assert!(sq.is_empty());
    }
}
