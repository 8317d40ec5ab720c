//! Storage bridge façade and bootstrap helpers.
//!
//! This crate wires host-provided bridge implementations (filesystem,
//! download registrar, content resolver, user notifier, clock) into the
//! storage core and exposes the narrow surface the rendered layer calls.
//! Desktop hosts typically enable the `desktop-shims` feature (which depends
//! on `bridge-desktop`); mobile shells inject their own adapters.
//!
//! ## The bridge surface
//!
//! The rendered layer is untrusted and speaks strings. Every operation
//! converts internal faults into its documented failure signal at this
//! boundary (an empty string, a `false`, or a user notice) so no raw error
//! ever crosses into script:
//!
//! | Operation | Returns |
//! |---|---|
//! | [`StorageBridge::save_to_cache`] | absolute path, or `""` on failure |
//! | [`StorageBridge::append_to_cache`] | `true`/`false` |
//! | [`StorageBridge::read_from_cache`] | base64 payload, or `""` on failure |
//! | [`StorageBridge::download_file`] | nothing; outcome via user notice |

pub mod error;

pub use error::{CoreError, Result};

use std::path::PathBuf;
use std::sync::Arc;

use bridge_traits::{
    content::{ContentRef, ContentResolver},
    filesystem::FileSystemAccess,
    notify::UserNotifier,
    registrar::DownloadRegistrar,
    time::Clock,
};
use core_runtime::{
    config::RuntimeConfig,
    events::{EventBus, Receiver, SharedFileEvent},
    ready::ReadyGate,
};
use core_storage::{
    download::{spawn_worker, DownloadHandle, DownloadRequest, DownloadService, DownloadStrategy},
    payload::encode_payload,
    share::ShareCaptureService,
    CacheStore,
};
use tracing::warn;

/// Aggregated handle to all bridge dependencies the core requires.
///
/// `registrar` is the one optional capability: its presence selects the
/// modern download strategy, its absence the legacy one.
pub struct CoreDependencies {
    pub filesystem: Arc<dyn FileSystemAccess>,
    pub registrar: Option<Arc<dyn DownloadRegistrar>>,
    pub content_resolver: Arc<dyn ContentResolver>,
    pub notifier: Arc<dyn UserNotifier>,
    pub clock: Arc<dyn Clock>,
}

impl CoreDependencies {
    /// Construct a dependency bundle from explicit bridge handles.
    pub fn new(
        filesystem: Arc<dyn FileSystemAccess>,
        registrar: Option<Arc<dyn DownloadRegistrar>>,
        content_resolver: Arc<dyn ContentResolver>,
        notifier: Arc<dyn UserNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            filesystem,
            registrar,
            content_resolver,
            notifier,
            clock,
        }
    }
}

/// Primary façade exposed to host applications.
///
/// Construction spawns the designated download worker, so a Tokio runtime
/// must be active. The façade is cheap to clone; all clones share the same
/// worker, event bus, and ready gate.
#[derive(Clone)]
pub struct StorageBridge {
    cache: CacheStore,
    downloads: DownloadHandle,
    download_strategy: DownloadStrategy,
    share: ShareCaptureService,
    events: EventBus,
    ready: ReadyGate,
}

impl StorageBridge {
    /// Create the bridge from the provided dependencies and configuration.
    pub fn new(deps: CoreDependencies, config: RuntimeConfig) -> Self {
        let events = EventBus::new(config.event_buffer_size);
        let ready = ReadyGate::new();

        let cache = CacheStore::new(deps.filesystem.clone(), deps.clock.clone());

        let download_service = DownloadService::new(
            deps.filesystem.clone(),
            deps.registrar.clone(),
            deps.notifier.clone(),
            deps.clock.clone(),
        );
        let download_strategy = download_service.strategy();
        let downloads = spawn_worker(download_service);

        let share = ShareCaptureService::new(
            deps.filesystem,
            deps.content_resolver,
            deps.notifier,
            events.clone(),
            ready.clone(),
            deps.clock,
        )
        .with_copy_buffer_size(config.copy_buffer_size);

        Self {
            cache,
            downloads,
            download_strategy,
            share,
            events,
            ready,
        }
    }

    /// Persist a payload into the private cache.
    ///
    /// Returns the absolute path, or the empty string on any failure.
    pub async fn save_to_cache(&self, base64_data: &str, filename: &str) -> String {
        match self.cache.save(base64_data, Some(filename)).await {
            Ok(path) => path.to_string_lossy().into_owned(),
            Err(e) => {
                warn!(error = %e, "saveToCache failed");
                String::new()
            }
        }
    }

    /// Append a payload chunk to a cached file. Returns `false` on failure.
    ///
    /// Chunks targeting the same filename must be awaited sequentially by
    /// the caller; the bridge does not order concurrent appends.
    pub async fn append_to_cache(&self, base64_data: &str, filename: &str) -> bool {
        match self.cache.append(base64_data, Some(filename)).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "appendToCache failed");
                false
            }
        }
    }

    /// Read a cached file back as base64, or the empty string on failure.
    pub async fn read_from_cache(&self, filename: &str) -> String {
        match self.cache.read(filename).await {
            Ok(bytes) => encode_payload(&bytes),
            Err(e) => {
                warn!(error = %e, "readFromCache failed");
                String::new()
            }
        }
    }

    /// Save a payload into the public downloads area, fire-and-forget.
    ///
    /// The outcome is surfaced to the user through the injected notifier;
    /// the caller receives nothing beyond implicit completion.
    pub fn download_file(&self, base64_data: &str, filename: &str, mime_type: &str) {
        let request = DownloadRequest {
            base64_data: base64_data.to_string(),
            filename: (!filename.is_empty()).then(|| filename.to_string()),
            mime_type: (!mime_type.is_empty()).then(|| mime_type.to_string()),
        };

        if let Err(e) = self.downloads.submit(request) {
            warn!(error = %e, "downloadFile could not be queued");
        }
    }

    /// The storage strategy downloads will use on this host.
    pub fn download_strategy(&self) -> DownloadStrategy {
        self.download_strategy
    }

    /// Host-glue entry: capture inbound shared content into the cache and
    /// schedule the shared-file event.
    pub async fn capture_shared_content(
        &self,
        reference: &str,
        mime_type: Option<&str>,
    ) -> Result<PathBuf> {
        Ok(self
            .share
            .capture(&ContentRef::new(reference), mime_type)
            .await?)
    }

    /// Acknowledge that the rendered layer has installed its event
    /// listeners. Pending and future shared-file events flow after this.
    pub fn renderer_ready(&self) {
        self.ready.mark_ready();
    }

    /// Subscribe to shared-file events.
    pub fn subscribe_events(&self) -> Receiver<SharedFileEvent> {
        self.events.subscribe()
    }
}

/// Convenience bootstrapper for desktop hosts.
///
/// ```ignore
/// use core_runtime::RuntimeConfig;
/// use core_service::bootstrap_desktop;
///
/// #[tokio::main]
/// async fn main() -> core_service::Result<()> {
///     let bridge = bootstrap_desktop(RuntimeConfig::default()).await?;
///     let path = bridge.save_to_cache("aGVsbG8=", "hello.txt").await;
///     assert!(!path.is_empty());
///     Ok(())
/// }
/// ```
#[cfg(feature = "desktop-shims")]
pub async fn bootstrap_desktop(config: RuntimeConfig) -> Result<StorageBridge> {
    use bridge_desktop::{
        FileContentResolver, SqliteDownloadRegistrar, TokioFileSystem, TracingNotifier,
    };
    use bridge_traits::time::SystemClock;

    let filesystem: Arc<dyn FileSystemAccess> = match (&config.cache_dir, &config.downloads_dir) {
        (Some(cache), Some(downloads)) => {
            Arc::new(TokioFileSystem::with_directories(cache.clone(), downloads.clone()))
        }
        (None, None) => Arc::new(TokioFileSystem::new()),
        _ => {
            return Err(CoreError::InitializationFailed(
                "cache_dir and downloads_dir overrides must be provided together".to_string(),
            ))
        }
    };

    let registrar = SqliteDownloadRegistrar::new(SqliteDownloadRegistrar::default_db_path())
        .await
        .map_err(|e| CoreError::InitializationFailed(e.to_string()))?;

    let deps = CoreDependencies::new(
        filesystem,
        Some(Arc::new(registrar)),
        Arc::new(FileContentResolver),
        Arc::new(TracingNotifier),
        Arc::new(SystemClock),
    );

    Ok(StorageBridge::new(deps, config))
}
