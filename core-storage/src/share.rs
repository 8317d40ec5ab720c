//! # Inbound Share Capture
//!
//! When another application shares content into the shell, the bridge copies
//! the referenced stream into the private cache under a generated name and
//! notifies the rendered layer with the resulting local path.
//!
//! ```text
//! share intent ──> ContentResolver ──> bounded copy ──> cache file
//!                                                          │
//!                              ReadyGate ──> EventBus ──> rendered layer
//! ```
//!
//! The copy is a bounded-buffer loop reading until end-of-stream, so payload
//! size never dictates memory use. Event emission waits on the renderer's
//! readiness acknowledgment; a capture that completes before the rendered
//! layer finished booting is delivered the moment it signals ready, not
//! after a guessed delay.
//!
//! Failures (missing content, stream read errors) are reported to the user
//! and no event is emitted. Partial files are left behind; they live in the
//! OS-reclaimed cache area.

use std::path::PathBuf;
use std::sync::Arc;

use bridge_traits::{
    content::{ContentRef, ContentResolver},
    filesystem::{FileSystemAccess, StandardLocation},
    notify::{Notice, UserNotifier},
    time::Clock,
};
use core_runtime::{
    config::DEFAULT_COPY_BUFFER_SIZE,
    events::{EventBus, SharedFileEvent},
    ready::ReadyGate,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::error::{Result, StorageError};
use crate::payload::DEFAULT_MIME_TYPE;

/// Captures inbound shared content into the private cache.
#[derive(Clone)]
pub struct ShareCaptureService {
    fs: Arc<dyn FileSystemAccess>,
    resolver: Arc<dyn ContentResolver>,
    notifier: Arc<dyn UserNotifier>,
    events: EventBus,
    ready: ReadyGate,
    clock: Arc<dyn Clock>,
    copy_buffer_size: usize,
}

impl ShareCaptureService {
    pub fn new(
        fs: Arc<dyn FileSystemAccess>,
        resolver: Arc<dyn ContentResolver>,
        notifier: Arc<dyn UserNotifier>,
        events: EventBus,
        ready: ReadyGate,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            fs,
            resolver,
            notifier,
            events,
            ready,
            clock,
            copy_buffer_size: DEFAULT_COPY_BUFFER_SIZE,
        }
    }

    /// Override the copy-loop read size (bytes).
    pub fn with_copy_buffer_size(mut self, size: usize) -> Self {
        self.copy_buffer_size = size.max(1);
        self
    }

    /// Copy the referenced content into the cache and schedule the
    /// shared-file event.
    ///
    /// Returns the cache path on success. On failure the user is notified,
    /// no event is emitted, and the error is returned for the host's logs.
    pub async fn capture(
        &self,
        reference: &ContentRef,
        mime_type: Option<&str>,
    ) -> Result<PathBuf> {
        let mime_type = mime_type.unwrap_or(DEFAULT_MIME_TYPE).to_string();

        match self.copy_to_cache(reference, &mime_type).await {
            Ok(path) => {
                info!(path = ?path, mime = %mime_type, "Captured shared content");
                self.schedule_emission(path.clone(), mime_type);
                Ok(path)
            }
            Err(e) => {
                warn!(reference = %reference, error = %e, "Share capture failed");
                if let Err(notify_err) = self
                    .notifier
                    .notify(Notice::failure(format!("Failed to receive shared file: {e}")))
                    .await
                {
                    warn!(error = %notify_err, "User notice could not be delivered");
                }
                Err(e)
            }
        }
    }

    async fn copy_to_cache(&self, reference: &ContentRef, mime_type: &str) -> Result<PathBuf> {
        let mut input = self
            .resolver
            .open_input_stream(reference)
            .await
            .map_err(|e| StorageError::MissingContent(e.to_string()))?;

        let cache_dir = self.fs.resolve_directory(StandardLocation::Cache).await?;
        let path = cache_dir.join(shared_asset_name(mime_type, self.clock.as_ref()));
        let mut output = self.fs.open_write_stream(&path).await?;

        let mut buffer = vec![0u8; self.copy_buffer_size];
        let mut total: u64 = 0;
        loop {
            let read = input.read(&mut buffer).await?;
            if read == 0 {
                break;
            }
            output.write_all(&buffer[..read]).await?;
            total += read as u64;
        }
        output.shutdown().await?;

        debug!(path = ?path, bytes = total, "Copied shared stream to cache");
        Ok(path)
    }

    fn schedule_emission(&self, path: PathBuf, mime_type: String) {
        let events = self.events.clone();
        let ready = self.ready.clone();

        tokio::spawn(async move {
            ready.ready().await;
            let event = SharedFileEvent {
                path: path.to_string_lossy().into_owned(),
                mime_type,
            };
            if events.emit(event).is_err() {
                warn!(path = ?path, "Shared-file event had no subscribers");
            }
        });
    }
}

/// Generated cache name for a captured share: `shared_asset_<unix-millis>`
/// plus an extension inferred from the declared MIME type.
fn shared_asset_name(mime_type: &str, clock: &dyn Clock) -> String {
    let extension = if mime_type.contains("pdf") {
        ".pdf"
    } else if mime_type.contains("image") {
        ".jpg"
    } else {
        ".tmp"
    };
    format!("shared_asset_{}{}", clock.unix_timestamp_millis(), extension)
}
