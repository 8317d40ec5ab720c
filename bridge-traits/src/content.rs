//! Content Resolver Abstraction
//!
//! Opens inbound shared content (the payload of a share intent) as a byte
//! stream. The reference format is host-specific (a content URI on mobile
//! shells, a plain path on desktop), so the core treats it as opaque.

use async_trait::async_trait;
use std::fmt;

use crate::error::Result;

/// Opaque reference to a piece of shareable content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentRef(String);

impl ContentRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentRef {
    fn from(reference: &str) -> Self {
        Self(reference.to_string())
    }
}

/// Content resolver trait
///
/// A missing or unreadable reference surfaces as a [`BridgeError`], never a
/// panic; the share-capture path reports it to the user and emits no event.
///
/// [`BridgeError`]: crate::error::BridgeError
#[async_trait]
pub trait ContentResolver: Send + Sync {
    /// Open the referenced content for streaming reads.
    async fn open_input_stream(
        &self,
        reference: &ContentRef,
    ) -> Result<Box<dyn tokio::io::AsyncRead + Send + Unpin>>;
}
