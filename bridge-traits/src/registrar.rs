//! Download Registrar Abstraction
//!
//! The registrar is the OS facility that indexes completed downloads so other
//! applications can discover them. Its *presence* is also the capability
//! marker for the modern storage strategy: hosts on scoped-storage platforms
//! inject one, legacy hosts inject none and the bridge falls back to direct
//! directory writes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;

/// A completed download to hand to the platform index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletedDownload {
    /// Name shown to the user in the platform's download listing.
    pub display_name: String,
    /// Short human-readable description of the artifact.
    pub description: String,
    /// MIME type used for indexing and open-with resolution.
    pub mime_type: String,
    /// Absolute path of the written file.
    pub path: PathBuf,
    /// Length of the written payload in bytes.
    pub byte_length: u64,
    /// Whether the file should be immediately visible to other applications.
    pub visible_to_others: bool,
}

/// Download registrar trait
///
/// Implementations forward the record to whatever indexes downloads on the
/// platform. Registration happens strictly AFTER the bytes are on disk; a
/// registrar never sees a path that does not exist yet.
#[async_trait]
pub trait DownloadRegistrar: Send + Sync {
    /// Register a completed download with the platform index.
    async fn register(&self, download: CompletedDownload) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_download_roundtrips_as_json() {
        let record = CompletedDownload {
            display_name: "report.pdf".to_string(),
            description: "Saved from web shell".to_string(),
            mime_type: "application/pdf".to_string(),
            path: PathBuf::from("/downloads/report.pdf"),
            byte_length: 5,
            visible_to_others: true,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: CompletedDownload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
