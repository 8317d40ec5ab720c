//! User Notifier rendering through tracing
//!
//! Desktop stand-in for the shell's toast facility: success notices land at
//! `info`, failures at `error`, both under the `user-notice` target so hosts
//! can route them separately from diagnostics.

use async_trait::async_trait;
use bridge_traits::{
    error::Result,
    notify::{Notice, NoticeKind, UserNotifier},
};
use tracing::{error, info};

/// Notifier that forwards notices to the tracing pipeline
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

#[async_trait]
impl UserNotifier for TracingNotifier {
    async fn notify(&self, notice: Notice) -> Result<()> {
        match notice.kind {
            NoticeKind::Success => info!(target: "user-notice", "{}", notice.message),
            NoticeKind::Failure => error!(target: "user-notice", "{}", notice.message),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notify_never_fails() {
        let notifier = TracingNotifier;
        notifier
            .notify(Notice::success("Downloaded: report.pdf"))
            .await
            .unwrap();
        notifier
            .notify(Notice::failure("Download failed: disk full"))
            .await
            .unwrap();
    }
}
