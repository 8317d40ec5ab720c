//! # Runtime Configuration
//!
//! Settings that shape the storage core's runtime behavior. Bridge
//! *dependencies* are bundled separately (see `core-service`); this module
//! only carries tunables and directory overrides, validated fail-fast with
//! actionable messages.
//!
//! ## Usage
//!
//! ```rust
//! use core_runtime::config::RuntimeConfig;
//!
//! let config = RuntimeConfig::builder()
//!     .event_buffer_size(32)
//!     .copy_buffer_size(16 * 1024)
//!     .build()
//!     .expect("valid config");
//!
//! assert_eq!(config.event_buffer_size, 32);
//! ```

use crate::error::{Error, Result};
use std::path::PathBuf;

use crate::events::DEFAULT_EVENT_BUFFER_SIZE;

/// Buffer size for the bounded share-capture copy loop.
pub const DEFAULT_COPY_BUFFER_SIZE: usize = 8 * 1024;

/// Runtime settings for the storage core.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Capacity of the shared-file event channel.
    pub event_buffer_size: usize,

    /// Read-chunk size for streaming copies of inbound shared content.
    pub copy_buffer_size: usize,

    /// Override for the application-private cache directory.
    /// `None` lets the filesystem provider resolve its platform default.
    pub cache_dir: Option<PathBuf>,

    /// Override for the public downloads directory.
    pub downloads_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    pub fn builder() -> RuntimeConfigBuilder {
        RuntimeConfigBuilder::default()
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: DEFAULT_EVENT_BUFFER_SIZE,
            copy_buffer_size: DEFAULT_COPY_BUFFER_SIZE,
            cache_dir: None,
            downloads_dir: None,
        }
    }
}

/// Builder for [`RuntimeConfig`].
#[derive(Debug, Default)]
pub struct RuntimeConfigBuilder {
    event_buffer_size: Option<usize>,
    copy_buffer_size: Option<usize>,
    cache_dir: Option<PathBuf>,
    downloads_dir: Option<PathBuf>,
}

impl RuntimeConfigBuilder {
    pub fn event_buffer_size(mut self, size: usize) -> Self {
        self.event_buffer_size = Some(size);
        self
    }

    pub fn copy_buffer_size(mut self, size: usize) -> Self {
        self.copy_buffer_size = Some(size);
        self
    }

    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    pub fn downloads_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.downloads_dir = Some(dir.into());
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<RuntimeConfig> {
        let event_buffer_size = self.event_buffer_size.unwrap_or(DEFAULT_EVENT_BUFFER_SIZE);
        if event_buffer_size == 0 {
            return Err(Error::Config(
                "event_buffer_size must be at least 1; a zero-capacity broadcast \
                 channel cannot deliver events"
                    .to_string(),
            ));
        }

        let copy_buffer_size = self.copy_buffer_size.unwrap_or(DEFAULT_COPY_BUFFER_SIZE);
        if copy_buffer_size == 0 {
            return Err(Error::Config(
                "copy_buffer_size must be at least 1 byte; the share-capture copy \
                 loop reads in bounded chunks"
                    .to_string(),
            ));
        }

        Ok(RuntimeConfig {
            event_buffer_size,
            copy_buffer_size,
            cache_dir: self.cache_dir,
            downloads_dir: self.downloads_dir,
        })
    }
}
