//! Centralized checksum utilities for frame operations
//!
//! Every CRC32 computed by the encoder or checked by the parser goes through
//! these functions so both sides agree on the algorithm.
//!
//! ## Design Philosophy
//!
//! - **Thin wrappers**: All functions are `#[inline]` for zero runtime overhead
//! - **Domain types**: Return `Crc32Value` for type safety

use crate::domain::Crc32Value;

/// Compute CRC32 checksum of data
///
/// Uses the IEEE polynomial (same as Ethernet, PKZIP and zlib's `crc32`)
#[inline]
pub fn compute_crc32(data: &[u8]) -> Crc32Value {
    Crc32Value::new(crc32fast::hash(data))
}
