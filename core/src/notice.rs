//! Transient, auto-dismissing user notices.
//!
//! Only one notice is visible at a time; showing a new one replaces the old.
//! A notice expires on its own once its display duration has elapsed, so hosts
//! simply ask for `current(now)` on every paint.

use std::time::{Duration, Instant};

/// Default display time of a notice.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A short message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub raised_at: Instant,
    pub duration: Duration,
}

impl Notice {
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) < self.duration
    }
}

/// Holds the notice currently on screen, if any.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    current: Option<Notice>,
    duration: Duration,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::with_duration(DEFAULT_NOTICE_DURATION)
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Show a notice raised at `now`, replacing any previous one.
    pub fn show_at(&mut self, message: impl Into<String>, kind: NoticeKind, now: Instant) {
        self.current = Some(Notice {
            message: message.into(),
            kind,
            raised_at: now,
            duration: self.duration,
        });
    }

    pub fn show(&mut self, message: impl Into<String>, kind: NoticeKind) {
        self.show_at(message, kind, Instant::now());
    }

    /// The notice visible at `now`. Expired notices are dropped.
    pub fn current_at(&mut self, now: Instant) -> Option<&Notice> {
        if self.current.as_ref().is_some_and(|n| !n.is_visible_at(now)) {
            self.current = None;
        }
        self.current.as_ref()
    }

    pub fn current(&mut self) -> Option<&Notice> {
        self.current_at(Instant::now())
    }

    /// The last notice raised, regardless of expiry.
    pub fn last(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expires() {
        let mut board = NoticeBoard::new();
        let t0 = Instant::now();
        board.show_at("All text cleared", NoticeKind::Success, t0);

        assert!(board.current_at(t0 + Duration::from_millis(2999)).is_some());
        assert!(board.current_at(t0 + Duration::from_millis(3000)).is_none());
        assert!(board.last().is_none());
    }

    #[test]
    fn test_new_notice_replaces_old() {
        let mut board = NoticeBoard::with_duration(Duration::from_secs(1));
        let t0 = Instant::now();
        board.show_at("first", NoticeKind::Success, t0);
        board.show_at("second", NoticeKind::Failure, t0 + Duration::from_millis(900));

        let n = board.current_at(t0 + Duration::from_millis(1500)).unwrap();
        assert_eq!(n.message, "second");
        assert_eq!(n.kind, NoticeKind::Failure);
    }

    #[test]
    fn test_dismiss() {
        let mut board = NoticeBoard::new();
        board.show("x", NoticeKind::Success);
        board.dismiss();
        assert!(board.current().is_none());
    }
}
