//! Cache Write Operations
//!
//! Best-effort persistence into the application-private cache area. These
//! operations back the rendered layer's staging needs: save a whole payload,
//! stream a large payload in chunks via append, read a staged file back.
//!
//! Ordering across concurrent appends to the SAME filename is the caller's
//! responsibility: the rendered layer must await each append before issuing
//! the next. The store performs no per-file locking.

use std::path::PathBuf;
use std::sync::Arc;

use bridge_traits::{
    filesystem::{FileSystemAccess, StandardLocation},
    time::Clock,
};
use bytes::Bytes;
use tracing::debug;

use crate::error::Result;
use crate::payload::decode_payload;
use crate::sanitize::sanitize_file_name;

/// Store for payloads staged in the private cache directory.
#[derive(Clone)]
pub struct CacheStore {
    fs: Arc<dyn FileSystemAccess>,
    clock: Arc<dyn Clock>,
}

impl CacheStore {
    pub fn new(fs: Arc<dyn FileSystemAccess>, clock: Arc<dyn Clock>) -> Self {
        Self { fs, clock }
    }

    /// Decode and write a payload, creating or truncating the target.
    ///
    /// Returns the absolute path of the written file.
    pub async fn save(&self, base64_data: &str, filename: Option<&str>) -> Result<PathBuf> {
        let safe_name = sanitize_file_name(filename, self.clock.as_ref());
        let bytes = decode_payload(base64_data)?;

        let path = self.target(&safe_name).await?;
        self.fs.write_file(&path, bytes).await?;

        debug!(path = ?path, "Saved payload to cache");
        Ok(path)
    }

    /// Decode and append a payload chunk to the target, creating it if
    /// missing. Used for chunked uploads split across sequential calls.
    pub async fn append(&self, base64_data: &str, filename: Option<&str>) -> Result<PathBuf> {
        let safe_name = sanitize_file_name(filename, self.clock.as_ref());
        let bytes = decode_payload(base64_data)?;

        let path = self.target(&safe_name).await?;
        self.fs.append_file(&path, bytes).await?;

        debug!(path = ?path, "Appended payload chunk to cache");
        Ok(path)
    }

    /// Read a previously staged file back.
    ///
    /// The name passes through the same sanitizer as the write side, so an
    /// untrusted caller cannot read outside the cache directory.
    pub async fn read(&self, filename: &str) -> Result<Bytes> {
        let safe_name = sanitize_file_name(Some(filename), self.clock.as_ref());
        let path = self.target(&safe_name).await?;
        Ok(self.fs.read_file(&path).await?)
    }

    async fn target(&self, safe_name: &str) -> Result<PathBuf> {
        let cache_dir = self.fs.resolve_directory(StandardLocation::Cache).await?;
        Ok(cache_dir.join(safe_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::payload::encode_payload;
    use bridge_desktop::TokioFileSystem;
    use bridge_traits::time::SystemClock;
    use tempfile::TempDir;

    fn store() -> (TempDir, CacheStore) {
        let dir = TempDir::new().unwrap();
        let fs = TokioFileSystem::with_directories(
            dir.path().join("cache"),
            dir.path().join("downloads"),
        );
        let store = CacheStore::new(Arc::new(fs), Arc::new(SystemClock));
        (dir, store)
    }

    #[tokio::test]
    async fn test_save_roundtrip() {
        let (_dir, store) = store();

        let path = store
            .save(&encode_payload(b"payload bytes"), Some("f.txt"))
            .await
            .unwrap();

        assert!(path.is_absolute());
        assert!(path.ends_with("f.txt"));
        assert_eq!(store.read("f.txt").await.unwrap(), Bytes::from_static(b"payload bytes"));
    }

    #[tokio::test]
    async fn test_append_accumulates_in_call_order() {
        let (_dir, store) = store();

        for chunk in [b"AAA".as_slice(), b"BB", b"C"] {
            store
                .append(&encode_payload(chunk), Some("chunks.bin"))
                .await
                .unwrap();
        }

        assert_eq!(
            store.read("chunks.bin").await.unwrap(),
            Bytes::from_static(b"AAABBC")
        );
    }

    #[tokio::test]
    async fn test_zero_length_payload_writes_zero_byte_file() {
        let (_dir, store) = store();

        let path = store.save("", Some("empty.bin")).await.unwrap();
        assert_eq!(tokio::fs::metadata(&path).await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_malformed_payload_is_a_decode_error() {
        let (_dir, store) = store();

        let result = store.save("%%%not-base64%%%", Some("f.txt")).await;
        assert!(matches!(result, Err(StorageError::Decode(_))));
    }

    #[tokio::test]
    async fn test_traversal_name_stays_inside_cache_dir() {
        let (dir, store) = store();

        let path = store
            .save(&encode_payload(b"x"), Some("../escape.txt"))
            .await
            .unwrap();

        assert!(path.starts_with(dir.path().join("cache")));
        assert!(!path.to_string_lossy().contains(".."));
    }

    #[tokio::test]
    async fn test_save_truncates_previous_content() {
        let (_dir, store) = store();

        store
            .save(&encode_payload(b"first version, long"), Some("f.bin"))
            .await
            .unwrap();
        store
            .save(&encode_payload(b"second"), Some("f.bin"))
            .await
            .unwrap();

        assert_eq!(store.read("f.bin").await.unwrap(), Bytes::from_static(b"second"));
    }
}
