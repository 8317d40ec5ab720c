//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! This crate provides production-ready implementations of every collaborator
//! the storage core requires, using desktop-appropriate libraries:
//! - `FileSystemAccess` using `tokio::fs` and the `dirs` crate
//! - `DownloadRegistrar` using a SQLite-backed completed-downloads index
//! - `ContentResolver` treating content references as local paths
//! - `UserNotifier` forwarding notices to the `tracing` pipeline
//!
//! Mobile shells replace these with adapters over their platform facilities;
//! the storage core is agnostic to which set is injected.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::{SqliteDownloadRegistrar, TokioFileSystem};
//!
//! #[tokio::main]
//! async fn main() -> bridge_traits::error::Result<()> {
//!     let fs = TokioFileSystem::new();
//!     let registrar = SqliteDownloadRegistrar::new("downloads.db".into()).await?;
//!     // Hand both to the core's dependency bundle
//!     Ok(())
//! }
//! ```

mod content;
mod filesystem;
mod notify;
mod registrar;

pub use content::FileContentResolver;
pub use filesystem::TokioFileSystem;
pub use notify::TracingNotifier;
pub use registrar::SqliteDownloadRegistrar;
