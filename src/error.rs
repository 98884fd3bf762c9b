//! Error types for codec operations

use thiserror::Error;

/// Errors surfaced to callers of the encode/decode operations
///
/// Malformed frames and unrecoverable gaps are not errors; the decoder
/// absorbs them. Only contract violations on the inputs end up here.
#[derive(Debug, Error)]
pub enum CourierError {
    /// Input was not a valid hex string
    #[error("Invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Encoder options out of range
    #[error("Invalid encoder options: {0}")]
    InvalidConfig(String),
}

/// Type alias for Result with CourierError
pub type Result<T> = std::result::Result<T, CourierError>;
