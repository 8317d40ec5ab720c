use bridge_traits::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Malformed base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Shared content unavailable: {0}")]
    MissingContent(String),

    #[error("Download worker is not running")]
    WorkerUnavailable,
}

pub type Result<T> = std::result::Result<T, StorageError>;
