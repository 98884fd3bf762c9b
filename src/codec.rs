//! Public encode/decode operations
//!
//! These are the entry points the CLI and any gateway consume: hex in,
//! frame lines out; frame lines in, raw bytes out.

use crate::config::EncodeOptions;
use crate::decoder::{DecodeReport, FrameCollector};
use crate::error::Result;
use crate::frame::FrameEncoder;

/// Trim whitespace, drop a `0x` prefix and lowercase a hex string
pub fn normalize_hex(input: &str) -> String {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    digits.to_ascii_lowercase()
}

/// Encode a hex-encoded payload into frame lines
///
/// The hex must already be bare digits; see [`normalize_hex`].
pub fn encode(tx_hex: &str, options: &EncodeOptions) -> Result<Vec<String>> {
    let raw = hex::decode(tx_hex)?;
    encode_bytes(&raw, options)
}

/// Encode raw bytes into frame lines
pub fn encode_bytes(data: &[u8], options: &EncodeOptions) -> Result<Vec<String>> {
    options.validate()?;
    Ok(FrameEncoder::new(options.clone()).encode_lines(data))
}

/// Decode frame lines in any order back into payload bytes
///
/// Malformed lines are ignored and the output stops at the first gap that
/// parity could not fill.
pub fn decode<I, S>(lines: I) -> Vec<u8>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    decode_with_report(lines).payload
}

/// Like [`decode`], also reporting what was rejected, recovered or truncated
pub fn decode_with_report<I, S>(lines: I) -> DecodeReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut collector = FrameCollector::new();
    collector.extend(lines);
    collector.finish()
}
