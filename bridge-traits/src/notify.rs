//! User Notification Abstraction
//!
//! Forwards outcome notices to whatever the host uses for user-visible
//! signals: a toast on mobile shells, a desktop notification, or a log line
//! in headless environments. This is the ONLY channel through which download
//! and share-capture outcomes reach the user; the bridge surface itself
//! returns no value for those operations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Outcome class of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// User-visible outcome message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }
}

/// Notifier trait
///
/// Implementations must not block on user interaction and must not fail the
/// calling operation: a notice that cannot be delivered is the host's problem
/// to log, not a storage fault.
#[async_trait]
pub trait UserNotifier: Send + Sync {
    /// Present a notice to the user.
    async fn notify(&self, notice: Notice) -> Result<()>;
}
