//! Filesystem Provider Implementation using Tokio

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    filesystem::{FileMetadata, FileSystemAccess, StandardLocation},
};
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Tokio-based filesystem provider
///
/// Resolves the application-private cache area under the platform cache
/// directory and the public downloads area under the user's download
/// directory, and performs all I/O through `tokio::fs`.
pub struct TokioFileSystem {
    cache_dir: PathBuf,
    downloads_dir: PathBuf,
}

impl TokioFileSystem {
    /// Create a provider with platform-default directories
    pub fn new() -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("web-shell-storage");

        let downloads_dir = dirs::download_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Downloads")
        });

        Self {
            cache_dir,
            downloads_dir,
        }
    }

    /// Create a provider with custom directories
    pub fn with_directories(cache_dir: PathBuf, downloads_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            downloads_dir,
        }
    }

    /// Convert std::io::Error to BridgeError
    fn map_io_error(e: std::io::Error) -> BridgeError {
        BridgeError::Io(e)
    }
}

impl Default for TokioFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileSystemAccess for TokioFileSystem {
    async fn resolve_directory(&self, location: StandardLocation) -> Result<PathBuf> {
        match location {
            StandardLocation::Cache => {
                // The private cache area is created on demand
                if !self.cache_dir.exists() {
                    fs::create_dir_all(&self.cache_dir)
                        .await
                        .map_err(Self::map_io_error)?;
                    debug!(path = ?self.cache_dir, "Created cache directory");
                }
                Ok(self.cache_dir.clone())
            }
            // The downloads area is owned by the platform; the legacy
            // download strategy ensures it exists explicitly.
            StandardLocation::Downloads => Ok(self.downloads_dir.clone()),
        }
    }

    async fn ensure_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).await.map_err(Self::map_io_error)?;
        debug!(path = ?path, "Ensured directory");
        Ok(())
    }

    async fn exists(&self, path: &Path) -> Result<bool> {
        Ok(fs::try_exists(path).await.map_err(Self::map_io_error)?)
    }

    async fn metadata(&self, path: &Path) -> Result<FileMetadata> {
        let metadata = fs::metadata(path).await.map_err(Self::map_io_error)?;

        Ok(FileMetadata {
            size: metadata.len(),
            modified_at: metadata
                .modified()
                .ok()
                .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
                .map(|d| d.as_secs() as i64),
            is_directory: metadata.is_dir(),
        })
    }

    async fn read_file(&self, path: &Path) -> Result<Bytes> {
        let data = fs::read(path).await.map_err(Self::map_io_error)?;
        debug!(path = ?path, size = data.len(), "Read file");
        Ok(Bytes::from(data))
    }

    async fn write_file(&self, path: &Path, data: Bytes) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(Self::map_io_error)?;
        }

        fs::write(path, data.as_ref())
            .await
            .map_err(Self::map_io_error)?;
        debug!(path = ?path, size = data.len(), "Wrote file");
        Ok(())
    }

    async fn append_file(&self, path: &Path, data: Bytes) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(Self::map_io_error)?;
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(Self::map_io_error)?;

        file.write_all(data.as_ref())
            .await
            .map_err(Self::map_io_error)?;
        file.flush().await.map_err(Self::map_io_error)?;

        debug!(path = ?path, size = data.len(), "Appended to file");
        Ok(())
    }

    async fn open_write_stream(
        &self,
        path: &Path,
    ) -> Result<Box<dyn tokio::io::AsyncWrite + Send + Unpin>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(Self::map_io_error)?;
        }

        let file = fs::File::create(path).await.map_err(Self::map_io_error)?;
        debug!(path = ?path, "Opened file for writing");
        Ok(Box::new(file))
    }

    async fn delete_file(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).await.map_err(Self::map_io_error)?;
        debug!(path = ?path, "Deleted file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scratch() -> (TempDir, TokioFileSystem) {
        let dir = TempDir::new().unwrap();
        let fs = TokioFileSystem::with_directories(
            dir.path().join("cache"),
            dir.path().join("downloads"),
        );
        (dir, fs)
    }

    #[tokio::test]
    async fn test_cache_directory_created_on_resolve() {
        let (_dir, fs) = scratch();

        let cache = fs.resolve_directory(StandardLocation::Cache).await.unwrap();
        assert!(cache.exists());
    }

    #[tokio::test]
    async fn test_downloads_directory_not_created_on_resolve() {
        let (_dir, fs) = scratch();

        let downloads = fs
            .resolve_directory(StandardLocation::Downloads)
            .await
            .unwrap();
        assert!(!downloads.exists());

        fs.ensure_directory(&downloads).await.unwrap();
        assert!(downloads.exists());
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let (_dir, fs) = scratch();
        let cache = fs.resolve_directory(StandardLocation::Cache).await.unwrap();
        let file = cache.join("test-file.txt");

        let data = Bytes::from("Hello, World!");
        fs.write_file(&file, data.clone()).await.unwrap();

        let read_data = fs.read_file(&file).await.unwrap();
        assert_eq!(data, read_data);

        fs.delete_file(&file).await.unwrap();
        assert!(!fs.exists(&file).await.unwrap());
    }

    #[tokio::test]
    async fn test_append_accumulates() {
        let (_dir, fs) = scratch();
        let cache = fs.resolve_directory(StandardLocation::Cache).await.unwrap();
        let file = cache.join("chunks.bin");

        fs.append_file(&file, Bytes::from_static(b"AA")).await.unwrap();
        fs.append_file(&file, Bytes::from_static(b"BB")).await.unwrap();

        assert_eq!(fs.read_file(&file).await.unwrap(), Bytes::from_static(b"AABB"));
    }

    #[tokio::test]
    async fn test_write_truncates_existing() {
        let (_dir, fs) = scratch();
        let cache = fs.resolve_directory(StandardLocation::Cache).await.unwrap();
        let file = cache.join("overwrite.bin");

        fs.write_file(&file, Bytes::from_static(b"longer content"))
            .await
            .unwrap();
        fs.write_file(&file, Bytes::from_static(b"short"))
            .await
            .unwrap();

        assert_eq!(fs.read_file(&file).await.unwrap(), Bytes::from_static(b"short"));
    }
}
