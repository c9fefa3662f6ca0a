use std::time::Duration;

/// How long the unknown-pool highlight stays on after an intake.
pub const HIGHLIGHT_TTL: Duration = Duration::from_secs(2);
/// How long a notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    /// Session-clock instant after which the notice is dropped.
    pub expires_at: Duration,
}

/// Advisory UI state with expiry times measured on the session clock.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Transients {
    notice: Option<Notice>,
    highlight_until: Option<Duration>,
}

impl Transients {
    /// Replaces any pending notice.
    pub(crate) fn notify(&mut self, now: Duration, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            kind,
            expires_at: now + NOTICE_TTL,
        });
    }

    pub(crate) fn highlight(&mut self, now: Duration) {
        self.highlight_until = Some(now + HIGHLIGHT_TTL);
    }

    /// Drops whatever has expired at `now`. Returns true if anything changed.
    pub(crate) fn expire(&mut self, now: Duration) -> bool {
        let mut changed = false;
        if self.notice.as_ref().is_some_and(|n| now >= n.expires_at) {
            self.notice = None;
            changed = true;
        }
        if self.highlight_until.is_some_and(|until| now >= until) {
            self.highlight_until = None;
            changed = true;
        }
        changed
    }

    pub(crate) fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub(crate) fn is_highlighted(&self) -> bool {
        self.highlight_until.is_some()
    }
}
