//! # Core Runtime Module
//!
//! Foundational runtime infrastructure for the storage core:
//! - Shared-file event delivery to the rendered layer
//! - Renderer readiness handshake
//! - Runtime configuration
//! - Logging and tracing bootstrap
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the storage modules depend on.
//! It establishes the event broadcasting mechanism, the readiness gate that
//! replaces timing-based event deferral, and the logging conventions used
//! throughout the workspace.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod ready;

pub use config::RuntimeConfig;
pub use error::{Error, Result};
pub use events::{EventBus, SharedFileEvent};
pub use ready::ReadyGate;
