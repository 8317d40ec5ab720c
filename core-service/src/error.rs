use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Core initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Capability missing: {capability} - {message}")]
    CapabilityMissing { capability: String, message: String },

    #[error("Storage error: {0}")]
    Storage(#[from] core_storage::StorageError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
