use std::fmt;
use std::time::Duration;

use crate::error::StudieHubError;

pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);
pub const LONG_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient user notification, the CLI's stand-in for a snackbar.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub duration: Duration,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
            duration: DEFAULT_DURATION,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
            duration: DEFAULT_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Uses the backend message when there is one, `default` otherwise.
    pub fn from_message(message: &str, default: &str) -> Self {
        if message.trim().is_empty() {
            Notice::success(default)
        } else {
            Notice::success(message)
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl From<&StudieHubError> for Notice {
    fn from(err: &StudieHubError) -> Self {
        Notice::error(err.to_string())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NoticeKind::Success => write!(f, "[ok] {}", self.message),
            NoticeKind::Error => write!(f, "[error] {}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_wins_over_default() {
        assert_eq!(Notice::from_message("Code sent", "OTP sent").message, "Code sent");
        assert_eq!(Notice::from_message("  ", "OTP sent").message, "OTP sent");
    }

    #[test]
    fn errors_render_with_prefix() {
        let notice = Notice::error("Failed to delete video").with_duration(LONG_DURATION);
        assert!(notice.is_error());
        assert_eq!(notice.duration, LONG_DURATION);
        assert_eq!(notice.to_string(), "[error] Failed to delete video");
    }
}
