use serde::Serialize;

/// Outcome tag on a notification record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// Transient record consumed once by the notification-display subsystem.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Sink the host's notification center exposes to this crate.
pub trait NotificationSink: Send + Sync {
    fn push(&self, notification: Notification);
}
