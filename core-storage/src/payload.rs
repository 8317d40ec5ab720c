//! Payload Transport Codec
//!
//! Payloads cross the script boundary as base64 text (the standard alphabet
//! with padding). A malformed encoding is an input error carried in
//! [`StorageError::Decode`]; it never panics and never truncates.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;

use crate::error::Result;

/// MIME type assumed when the caller supplies none.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Decode a base64 payload into bytes.
///
/// The empty string decodes to zero bytes, a legal zero-length payload.
pub fn decode_payload(base64_data: &str) -> Result<Bytes> {
    let bytes = STANDARD.decode(base64_data)?;
    Ok(Bytes::from(bytes))
}

/// Encode bytes for transport back to the rendered layer.
pub fn encode_payload(data: &[u8]) -> String {
    STANDARD.encode(data)
}
