//! # Download Save with Strategy Selection
//!
//! Persists a payload into the public downloads area and makes it visible to
//! the user. Two strategies exist, selected per call from the capabilities
//! the host injected:
//!
//! - **Modern** (a [`DownloadRegistrar`] is present): write the bytes into
//!   the downloads location, then register the completed file so other
//!   applications can discover it.
//! - **Legacy** (no registrar): ensure the downloads directory exists
//!   (creating it recursively), then write directly. There is nothing to
//!   notify on such platforms.
//!
//! ## Execution model
//!
//! All downloads run on one designated worker task, consuming a queue in
//! strict arrival order. This is the systems rendition of "runs on the
//! context that owns user-facing notification delivery". Submission is
//! fire-and-forget:
//! the caller gets no return value, and the outcome reaches the user only
//! through the injected [`UserNotifier`]. There is no cancellation; a
//! submitted request runs to completion or failure.
//!
//! ## Usage
//!
//! ```ignore
//! use core_storage::download::{spawn_worker, DownloadRequest, DownloadService};
//!
//! let handle = spawn_worker(DownloadService::new(fs, Some(registrar), notifier, clock));
//! handle.submit(DownloadRequest {
//!     base64_data: "aGVsbG8=".to_string(),
//!     filename: Some("report.pdf".to_string()),
//!     mime_type: Some("application/pdf".to_string()),
//! })?;
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use bridge_traits::{
    filesystem::{FileSystemAccess, StandardLocation},
    notify::{Notice, UserNotifier},
    registrar::{CompletedDownload, DownloadRegistrar},
    time::Clock,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::{Result, StorageError};
use crate::payload::{decode_payload, DEFAULT_MIME_TYPE};
use crate::sanitize::sanitize_file_name;

/// Description attached to registrar records.
const DOWNLOAD_DESCRIPTION: &str = "Web shell download";

/// One download submission from the rendered layer.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub base64_data: String,
    pub filename: Option<String>,
    pub mime_type: Option<String>,
}

/// Which storage generation a download will use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStrategy {
    /// Scoped public storage with registrar indexing.
    Modern,
    /// Direct path writes with explicit directory creation.
    Legacy,
}

/// Executes download requests against the injected collaborators.
#[derive(Clone)]
pub struct DownloadService {
    fs: Arc<dyn FileSystemAccess>,
    registrar: Option<Arc<dyn DownloadRegistrar>>,
    notifier: Arc<dyn UserNotifier>,
    clock: Arc<dyn Clock>,
}

impl DownloadService {
    pub fn new(
        fs: Arc<dyn FileSystemAccess>,
        registrar: Option<Arc<dyn DownloadRegistrar>>,
        notifier: Arc<dyn UserNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            fs,
            registrar,
            notifier,
            clock,
        }
    }

    /// The strategy the next download will take.
    pub fn strategy(&self) -> DownloadStrategy {
        if self.registrar.is_some() {
            DownloadStrategy::Modern
        } else {
            DownloadStrategy::Legacy
        }
    }

    /// Execute one request. Never returns an error: every outcome is
    /// converted to a user notice at this boundary.
    pub async fn execute(&self, request: DownloadRequest) {
        let safe_name = sanitize_file_name(request.filename.as_deref(), self.clock.as_ref());

        match self.save(&request, &safe_name).await {
            Ok(path) => {
                info!(path = ?path, strategy = ?self.strategy(), "Download completed");
                self.notify(Notice::success(format!("Downloaded: {safe_name}")))
                    .await;
            }
            Err(e) => {
                warn!(name = %safe_name, error = %e, "Download failed");
                self.notify(Notice::failure(format!("Download failed: {e}")))
                    .await;
            }
        }
    }

    async fn save(&self, request: &DownloadRequest, safe_name: &str) -> Result<PathBuf> {
        let bytes = decode_payload(&request.base64_data)?;
        let downloads = self
            .fs
            .resolve_directory(StandardLocation::Downloads)
            .await?;
        let path = downloads.join(safe_name);

        match &self.registrar {
            Some(registrar) => {
                // Modern: the platform owns the downloads area; write, then
                // hand the completed file to the index.
                let byte_length = bytes.len() as u64;
                self.fs.write_file(&path, bytes).await?;

                registrar
                    .register(CompletedDownload {
                        display_name: safe_name.to_string(),
                        description: DOWNLOAD_DESCRIPTION.to_string(),
                        mime_type: request
                            .mime_type
                            .clone()
                            .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
                        path: path.clone(),
                        byte_length,
                        visible_to_others: true,
                    })
                    .await?;
            }
            None => {
                // Legacy: nothing manages the directory for us.
                self.fs.ensure_directory(&downloads).await?;
                self.fs.write_file(&path, bytes).await?;
            }
        }

        Ok(path)
    }

    async fn notify(&self, notice: Notice) {
        if let Err(e) = self.notifier.notify(notice).await {
            warn!(error = %e, "User notice could not be delivered");
        }
    }
}

/// Handle for submitting downloads to the worker.
#[derive(Clone)]
pub struct DownloadHandle {
    tx: mpsc::UnboundedSender<DownloadRequest>,
}

impl DownloadHandle {
    /// Enqueue a request, fire-and-forget.
    ///
    /// Fails only when the worker task is gone (host shutting down).
    pub fn submit(&self, request: DownloadRequest) -> Result<()> {
        self.tx
            .send(request)
            .map_err(|_| StorageError::WorkerUnavailable)
    }
}

/// Spawn the designated download worker.
///
/// The worker owns the service and drains the queue one request at a time,
/// serializing every download relative to the others. It stops when the last
/// [`DownloadHandle`] is dropped.
pub fn spawn_worker(service: DownloadService) -> DownloadHandle {
    let (tx, mut rx) = mpsc::unbounded_channel::<DownloadRequest>();

    tokio::spawn(async move {
        while let Some(request) = rx.recv().await {
            service.execute(request).await;
        }
        debug!("Download worker stopped");
    });

    DownloadHandle { tx }
}
