//! # Renderer Readiness Handshake
//!
//! Share-capture events must not be dispatched before the rendered layer has
//! installed its listeners, or they are lost. Instead of guessing with a
//! fixed delay, the renderer acknowledges readiness exactly once and every
//! pending emission proceeds immediately after.
//!
//! ## Usage
//!
//! ```rust
//! use core_runtime::ready::ReadyGate;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let gate = ReadyGate::new();
//! let waiter = gate.clone();
//!
//! let emission = tokio::spawn(async move {
//!     waiter.ready().await;
//!     // dispatch event here
//! });
//!
//! gate.mark_ready();
//! emission.await.unwrap();
//! # }
//! ```

use std::sync::Arc;
use tokio::sync::watch;

/// One-shot, multi-waiter readiness gate.
///
/// Starts closed; [`mark_ready`](Self::mark_ready) opens it permanently.
/// Waiters that arrive after the gate opened resolve immediately, so a late
/// capture never stalls.
#[derive(Clone, Debug)]
pub struct ReadyGate {
    sender: Arc<watch::Sender<bool>>,
}

impl ReadyGate {
    /// Creates a closed gate.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Opens the gate. Idempotent.
    pub fn mark_ready(&self) {
        self.sender.send_replace(true);
    }

    /// Whether the gate has been opened.
    pub fn is_ready(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolves once the gate is open (immediately if it already is).
    pub async fn ready(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives at least as long as `self`, so wait_for cannot
        // observe a closed channel here.
        let _ = receiver.wait_for(|ready| *ready).await;
    }
}

impl Default for ReadyGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_gate_starts_closed() {
        let gate = ReadyGate::new();
        assert!(!gate.is_ready());
    }

    #[tokio::test]
    async fn test_waiter_resolves_after_mark_ready() {
        let gate = ReadyGate::new();
        let waiter = gate.clone();

        let handle = tokio::spawn(async move {
            waiter.ready().await;
        });

        // Give the waiter a chance to park first.
        tokio::time::sleep(Duration::from_millis(5)).await;
        gate.mark_ready();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("waiter should resolve once ready")
            .unwrap();
    }

    #[tokio::test]
    async fn test_late_waiter_resolves_immediately() {
        let gate = ReadyGate::new();
        gate.mark_ready();
        assert!(gate.is_ready());

        tokio::time::timeout(Duration::from_millis(50), gate.ready())
            .await
            .expect("already-open gate must not block");
    }

    #[tokio::test]
    async fn test_mark_ready_is_idempotent() {
        let gate = ReadyGate::new();
        gate.mark_ready();
        gate.mark_ready();
        assert!(gate.is_ready());
    }
}
