//! Filesystem Provider Abstraction
//!
//! Platform-agnostic trait for directory resolution and file I/O. The bridge
//! core never touches raw paths outside the directories resolved here.

use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Well-known storage locations the bridge writes into.
///
/// - `Cache`: application-private cache area. Files here may be reclaimed by
///   the OS at any time; callers receive absolute paths into it but must not
///   assume longevity.
/// - `Downloads`: the public, user-visible downloads area. Files here persist
///   until the user or OS removes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardLocation {
    Cache,
    Downloads,
}

/// File metadata information
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub size: u64,
    pub modified_at: Option<i64>,
    pub is_directory: bool,
}

/// Filesystem provider trait
///
/// Abstracts file I/O so the storage core runs unchanged over:
/// - Desktop: direct filesystem access (`bridge-desktop`)
/// - Mobile shells: sandboxed app directories behind the same contract
///
/// Every handle produced by this trait is scoped to a single operation and
/// must be closed on all exit paths, including errors.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::filesystem::{FileSystemAccess, StandardLocation};
///
/// async fn stash(fs: &dyn FileSystemAccess, data: bytes::Bytes) -> bridge_traits::error::Result<()> {
///     let cache = fs.resolve_directory(StandardLocation::Cache).await?;
///     fs.write_file(&cache.join("data.bin"), data).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait FileSystemAccess: Send + Sync {
    /// Resolve a standard location to an absolute directory path.
    ///
    /// `Cache` is created on demand; `Downloads` is resolved but NOT created:
    /// on legacy platforms the download path explicitly ensures it exists
    /// (see `ensure_directory`), and on modern platforms the OS owns it.
    async fn resolve_directory(&self, location: StandardLocation) -> Result<PathBuf>;

    /// Create a directory and all parent directories if they don't exist
    async fn ensure_directory(&self, path: &Path) -> Result<()>;

    /// Check if a file or directory exists
    async fn exists(&self, path: &Path) -> Result<bool>;

    /// Get metadata for a file or directory
    async fn metadata(&self, path: &Path) -> Result<FileMetadata>;

    /// Read entire file contents into memory
    async fn read_file(&self, path: &Path) -> Result<Bytes>;

    /// Write data to a file, creating or truncating it
    async fn write_file(&self, path: &Path, data: Bytes) -> Result<()>;

    /// Append data to an existing file or create it
    async fn append_file(&self, path: &Path, data: Bytes) -> Result<()>;

    /// Open a file for streaming writes, creating or truncating it.
    ///
    /// Used for bounded-buffer copies of inbound shared content where the
    /// payload never needs to be held in memory at once.
    async fn open_write_stream(
        &self,
        path: &Path,
    ) -> Result<Box<dyn tokio::io::AsyncWrite + Send + Unpin>>;

    /// Delete a file
    async fn delete_file(&self, path: &Path) -> Result<()>;
}
