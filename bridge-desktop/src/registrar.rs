//! Download Registrar backed by SQLite
//!
//! Desktop rendition of the platform download index: completed downloads are
//! recorded in a small SQLite database that other local applications (or the
//! shell's own download listing) can query.

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    registrar::{CompletedDownload, DownloadRegistrar},
};
use sqlx::{sqlite::SqlitePool, Row};
use std::path::PathBuf;
use tracing::debug;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS completed_downloads (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    display_name TEXT NOT NULL,
    description TEXT NOT NULL,
    mime_type TEXT NOT NULL,
    path TEXT NOT NULL,
    byte_length INTEGER NOT NULL,
    visible_to_others INTEGER NOT NULL,
    registered_at INTEGER NOT NULL
)
"#;

/// SQLite-backed download registrar
pub struct SqliteDownloadRegistrar {
    pool: SqlitePool,
}

impl SqliteDownloadRegistrar {
    /// Platform-default location for the index database
    pub fn default_db_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("web-shell-storage")
            .join("downloads.db")
    }

    /// Create a registrar persisting to the given database path
    pub async fn new(db_path: PathBuf) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(BridgeError::Io)?;
        }

        // Convert path to string, replacing backslashes with forward slashes for SQLite URL
        let path_str = db_path.to_string_lossy().replace('\\', "/");
        let db_url = format!("sqlite://{}?mode=rwc", path_str);

        let pool = SqlitePool::connect(&db_url)
            .await
            .map_err(|e| BridgeError::Registrar(format!("Failed to connect to DB: {}", e)))?;

        Self::create_schema(&pool).await?;
        debug!(path = ?db_path, "Initialized download registrar");

        Ok(Self { pool })
    }

    /// Create an in-memory registrar (for testing)
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .map_err(|e| BridgeError::Registrar(format!("Failed to connect to DB: {}", e)))?;

        Self::create_schema(&pool).await?;
        Ok(Self { pool })
    }

    async fn create_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(pool)
            .await
            .map_err(|e| BridgeError::Registrar(format!("Failed to create table: {}", e)))?;
        Ok(())
    }

    fn now() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }

    /// Most recently registered downloads, newest first.
    ///
    /// This is the discovery side of the index: what a download listing
    /// would render.
    pub async fn recent(&self, limit: u32) -> Result<Vec<CompletedDownload>> {
        let rows = sqlx::query(
            r#"
            SELECT display_name, description, mime_type, path, byte_length, visible_to_others
            FROM completed_downloads
            ORDER BY registered_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BridgeError::Registrar(format!("Failed to query downloads: {}", e)))?;

        Ok(rows
            .into_iter()
            .map(|row| CompletedDownload {
                display_name: row.get(0),
                description: row.get(1),
                mime_type: row.get(2),
                path: PathBuf::from(row.get::<String, _>(3)),
                byte_length: row.get::<i64, _>(4) as u64,
                visible_to_others: row.get::<i64, _>(5) != 0,
            })
            .collect())
    }
}

#[async_trait]
impl DownloadRegistrar for SqliteDownloadRegistrar {
    async fn register(&self, download: CompletedDownload) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO completed_downloads
                (display_name, description, mime_type, path, byte_length, visible_to_others, registered_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&download.display_name)
        .bind(&download.description)
        .bind(&download.mime_type)
        .bind(download.path.to_string_lossy().into_owned())
        .bind(download.byte_length as i64)
        .bind(download.visible_to_others as i64)
        .bind(Self::now())
        .execute(&self.pool)
        .await
        .map_err(|e| BridgeError::Registrar(format!("Failed to register download: {}", e)))?;

        debug!(
            name = %download.display_name,
            bytes = download.byte_length,
            "Registered completed download"
        );
        Ok(())
    }
}
