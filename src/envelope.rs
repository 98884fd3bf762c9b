//! Text envelope for frame payloads
//!
//! Frame payloads are carried as standard, padded base64 so they survive
//! SMS gateways, radio text modes and manual transcription.

use base64::{engine::general_purpose::STANDARD, DecodeError, Engine};

/// Encode raw bytes into the text-safe alphabet
#[inline]
pub fn encode_envelope(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode a text envelope back into raw bytes
///
/// Decoding is strict: characters outside the alphabet and bad padding are
/// errors rather than being skipped.
#[inline]
pub fn decode_envelope(text: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD.decode(text)
}
