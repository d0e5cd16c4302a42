//! Transient status messages surfaced to the reader

use std::time::{Duration, Instant};

/// How long a status message stays visible
pub const STATUS_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// A transient status message with an expiry
#[derive(Debug, Clone)]
pub struct TransientMessage {
    /// The message text
    pub text: String,
    pub kind: StatusKind,
    /// When this message expires
    pub expires_at: Instant,
}

impl TransientMessage {
    /// Create a new transient message with the given duration
    pub fn new(text: impl Into<String>, kind: StatusKind, duration: Duration) -> Self {
        Self {
            text: text.into(),
            kind,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, StatusKind::Error, STATUS_DURATION)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, StatusKind::Info, STATUS_DURATION)
    }

    /// Check if this message has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}
