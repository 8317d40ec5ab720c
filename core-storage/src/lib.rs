//! # Storage Bridge Core
//!
//! The data/storage contract between a web-rendered application and device
//! storage. The rendered layer never touches the filesystem; it hands the
//! bridge base64 payloads and untrusted filenames, and receives back paths,
//! booleans, and a single shared-file event.
//!
//! ## Modules
//!
//! - [`sanitize`] - total filename-safety policy for untrusted names
//! - [`payload`] - base64 transport codec
//! - [`cache`] - save/append/read in the application-private cache area
//! - [`download`] - public download saves with modern/legacy strategy
//!   selection and a single designated worker
//! - [`share`] - inbound share capture with deferred event emission
//!
//! ## Collaborators
//!
//! Everything platform-specific is injected through `bridge-traits`:
//! filesystem access, the download registrar (whose presence selects the
//! modern strategy), the content resolver, the user notifier, and the clock.
//! Desktop implementations live in `bridge-desktop`; mobile shells supply
//! their own.
//!
//! ## Error policy
//!
//! Operations here return typed [`StorageError`]s. The caller-facing façade
//! (`core-service`) converts them into the bridge surface's documented
//! failure signals (empty string, `false`, or a user notice) so no raw
//! fault ever crosses to the rendered layer.

pub mod cache;
pub mod download;
pub mod error;
pub mod payload;
pub mod sanitize;
pub mod share;

pub use cache::CacheStore;
pub use download::{
    spawn_worker, DownloadHandle, DownloadRequest, DownloadService, DownloadStrategy,
};
pub use error::{Result, StorageError};
pub use payload::{decode_payload, encode_payload, DEFAULT_MIME_TYPE};
pub use sanitize::sanitize_file_name;
pub use share::ShareCaptureService;
