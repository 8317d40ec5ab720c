//! Content Resolver for local files
//!
//! On desktop an inbound share carries a plain filesystem path, so resolving
//! a [`ContentRef`] is opening that path for reading.

use async_trait::async_trait;
use bridge_traits::{
    content::{ContentRef, ContentResolver},
    error::{BridgeError, Result},
};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Resolver treating content references as local filesystem paths
pub struct FileContentResolver;

#[async_trait]
impl ContentResolver for FileContentResolver {
    async fn open_input_stream(
        &self,
        reference: &ContentRef,
    ) -> Result<Box<dyn tokio::io::AsyncRead + Send + Unpin>> {
        let path = Path::new(reference.as_str());
        let file = fs::File::open(path).await.map_err(|e| {
            BridgeError::NotAvailable(format!(
                "Shared content {} cannot be opened: {}",
                reference, e
            ))
        })?;

        debug!(path = ?path, "Opened shared content");
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_opens_existing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("shared.bin");
        tokio::fs::write(&path, b"payload").await.unwrap();

        let resolver = FileContentResolver;
        let mut stream = resolver
            .open_input_stream(&ContentRef::new(path.to_string_lossy()))
            .await
            .unwrap();

        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await.unwrap();
        assert_eq!(buf, b"payload");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_available() {
        let resolver = FileContentResolver;
        let result = resolver
            .open_input_stream(&ContentRef::new("/nonexistent/shared.bin"))
            .await;

        assert!(matches!(result, Err(BridgeError::NotAvailable(_))));
    }
}
