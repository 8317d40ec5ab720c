//! # Shared-File Event Delivery
//!
//! Broadcast channel carrying [`SharedFileEvent`] from the storage core to
//! the rendered layer, built on `tokio::sync::broadcast`.
//!
//! ## Overview
//!
//! The bridge's inbound event surface is a single named event: after a share
//! capture completes, the rendered layer receives the absolute local path and
//! MIME type of the captured file. The event is delivered once per capture,
//! to every subscriber, and only after the renderer has signalled readiness
//! (see [`ReadyGate`](crate::ready::ReadyGate)).
//!
//! ```text
//! ┌────────────────────┐    emit     ┌───────────┐   subscribe   ┌───────────────┐
//! │ ShareCaptureService├────────────>│ EventBus  ├──────────────>│ rendered layer│
//! └────────────────────┘             └───────────┘               └───────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use core_runtime::events::{EventBus, SharedFileEvent};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let bus = EventBus::new(16);
//! let mut rx = bus.subscribe();
//!
//! bus.emit(SharedFileEvent {
//!     path: "/cache/shared_asset_1700000000000.pdf".to_string(),
//!     mime_type: "application/pdf".to_string(),
//! })
//! .ok();
//!
//! let event = rx.recv().await.unwrap();
//! assert_eq!(event.mime_type, "application/pdf");
//! # }
//! ```
//!
//! ## Error Handling
//!
//! - `RecvError::Lagged(n)`: the subscriber fell behind by `n` events.
//!   Non-fatal; later events still arrive.
//! - `RecvError::Closed`: every sender is gone; treat as shutdown.
//!
//! Emitting with no subscribers returns an error; the share path treats it
//! as "nobody is listening yet" and relies on the ready gate to avoid it.

use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;

// Re-export commonly used types
pub use tokio::sync::broadcast::error::{RecvError, SendError};
pub use tokio::sync::broadcast::Receiver;

/// Default buffer size for the event bus channel.
///
/// Share captures are user-driven and rare; a small buffer suffices.
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 16;

/// Notification that an inbound shared file landed in the private cache.
///
/// `path` is absolute and points into the application cache area; the file
/// persists until the OS reclaims the cache. `mime_type` is the type the
/// sharing application declared, defaulted to `application/octet-stream`
/// when absent. Serialized as tagged JSON when crossing the script boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename = "sharedFile")]
pub struct SharedFileEvent {
    /// Absolute local path of the captured file.
    pub path: String,
    /// Declared MIME type of the content.
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Broadcast bus for shared-file events.
///
/// Cloning the bus clones the sender side; each `subscribe()` creates an
/// independent receiver. Events are cloned per subscriber, so keep payloads
/// lightweight (paths and type strings, never file bytes).
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<SharedFileEvent>,
}

impl EventBus {
    /// Creates a new event bus with the specified buffer capacity.
    ///
    /// A subscriber that falls behind by more than `capacity` events
    /// receives `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes an event to all subscribers.
    ///
    /// Returns the number of subscribers that received the event, or an
    /// error when there are none.
    pub fn emit(&self, event: SharedFileEvent) -> Result<usize, SendError<SharedFileEvent>> {
        self.sender.send(event)
    }

    /// Creates a new subscriber. Past events are not replayed.
    pub fn subscribe(&self) -> Receiver<SharedFileEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER_SIZE)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}
