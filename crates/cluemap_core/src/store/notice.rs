//! User-facing notices emitted by store operations.
//!
//! # Responsibility
//! - Decouple the core from whatever snackbar/toast surface the UI uses.
//! - Provide a logging default so headless callers still see outcomes.

use log::{error, info, warn};

/// Severity of a store notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// One transient notification for the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Sink for store notices. UI collaborators implement this; tests use a
/// recording fake.
pub trait NoticeSink {
    fn notify(&self, notice: &Notice);
}

/// Default sink: forwards notices to the log facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNoticeSink;

impl NoticeSink for LogNoticeSink {
    fn notify(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Success => {
                info!("event=notice module=store level=success message={}", notice.message);
            }
            NoticeLevel::Warning => {
                warn!("event=notice module=store level=warning message={}", notice.message);
            }
            NoticeLevel::Error => {
                error!("event=notice module=store level=error message={}", notice.message);
            }
        }
    }
}
