//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host shell.
//!
//! ## Overview
//!
//! This crate defines the contract between the storage core and the
//! platform-specific collaborators it depends on but does not implement. Each
//! trait represents one capability the core requires:
//!
//! - [`FileSystemAccess`](filesystem::FileSystemAccess) - directory
//!   resolution and file create/append/read
//! - [`DownloadRegistrar`](registrar::DownloadRegistrar) - the OS facility
//!   indexing completed downloads for cross-application visibility
//! - [`ContentResolver`](content::ContentResolver) - opens inbound shared
//!   content as a byte stream
//! - [`UserNotifier`](notify::UserNotifier) - user-visible outcome delivery
//!   (toast equivalent)
//! - [`Clock`](time::Clock) - time source for deterministic testing of
//!   generated filenames
//!
//! ## Capability-driven strategy selection
//!
//! The core does not probe OS versions. A host that supports scoped public
//! storage injects a `DownloadRegistrar`; a legacy host injects none, and the
//! download path falls back to direct directory writes. Missing *required*
//! capabilities fail fast at wiring time with descriptive errors:
//!
//! ```ignore
//! let filesystem = deps.filesystem
//!     .ok_or_else(|| CoreError::CapabilityMissing {
//!         capability: "FileSystemAccess".to_string(),
//!         message: "No filesystem implementation provided. \
//!                  Desktop: enable the desktop-shims feature. \
//!                  Mobile: inject the shell's adapter.".to_string(),
//!     })?;
//! ```
//!
//! ## Error Handling
//!
//! All bridge traits use [`BridgeError`](error::BridgeError). Platform
//! implementations should convert platform-specific errors into it and keep
//! messages actionable (include paths, not stack traces).
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` so implementations can be shared
//! across async tasks behind `Arc`.

pub mod content;
pub mod error;
pub mod filesystem;
pub mod notify;
pub mod registrar;
pub mod time;

pub use error::BridgeError;

// Re-export commonly used types
pub use content::{ContentRef, ContentResolver};
pub use filesystem::{FileMetadata, FileSystemAccess, StandardLocation};
pub use notify::{Notice, NoticeKind, UserNotifier};
pub use registrar::{CompletedDownload, DownloadRegistrar};
pub use time::{Clock, SystemClock};
