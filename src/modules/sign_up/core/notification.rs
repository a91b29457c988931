use std::time::Duration;

use tokio::time::Instant;

pub const SIGN_UP_SUCCESS_MESSAGE: &str = "sign up successfully!";
pub const SIGN_UP_ERROR_MESSAGE: &str = "error signing up!";

pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(6000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient outcome message, dismissed once `ttl` has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub raised_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    pub fn success(raised_at: Instant, ttl: Duration) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: SIGN_UP_SUCCESS_MESSAGE.to_string(),
            raised_at,
            ttl,
        }
    }

    pub fn error(raised_at: Instant, ttl: Duration) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: SIGN_UP_ERROR_MESSAGE.to_string(),
            raised_at,
            ttl,
        }
    }

    pub fn expires_at(&self) -> Instant {
        self.raised_at + self.ttl
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now < self.expires_at()
    }
}
