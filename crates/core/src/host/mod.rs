//! What the generator needs from its embedding application besides storage.

use std::sync::Mutex;

use thiserror::Error;

/// Duration of warning notices, in milliseconds.
pub const WARNING_DURATION_MS: u64 = 3000;
/// Duration of error notices, in milliseconds.
pub const ERROR_DURATION_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// A short-lived, user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub duration_ms: u64,
}

impl Notice {
    pub fn success(message: impl Into<String>, duration_ms: u64) -> Self {
        Self { level: NoticeLevel::Success, message: message.into(), duration_ms }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into(), duration_ms: WARNING_DURATION_MS }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into(), duration_ms: ERROR_DURATION_MS }
    }
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("could not open '{path}': {reason}")]
    OpenFailed { path: String, reason: String },
}

pub trait Host: Send + Sync {
    fn notify(&self, notice: Notice);

    /// Show the file at the vault-relative `path` to the user.
    fn open_file(&self, path: &str) -> Result<(), HostError>;
}

/// A host that only records what it was asked to do.
#[derive(Debug, Default)]
pub struct RecordingHost {
    notices: Mutex<Vec<Notice>>,
    opened: Mutex<Vec<String>>,
    fail_open: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose `open_file` always fails.
    pub fn failing_open() -> Self {
        Self { fail_open: true, ..Self::default() }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().map(|o| o.clone()).unwrap_or_default()
    }
}

impl Host for RecordingHost {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }

    fn open_file(&self, path: &str) -> Result<(), HostError> {
        if self.fail_open {
            return Err(HostError::OpenFailed {
                path: path.to_string(),
                reason: "no editor available".into(),
            });
        }
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(path.to_string());
        }
        Ok(())
    }
}
