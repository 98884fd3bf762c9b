//! Fixed-size chunking of payload buffers

use std::slice::Chunks;

/// Split `data` into ordered slices of `chunk_size` bytes
///
/// The final slice may be shorter. Empty input produces no slices. The
/// returned iterator is lazy and `Clone`, so it can be restarted.
///
/// # Panics
///
/// Panics if `chunk_size` is 0. Callers validate sizes through
/// [`EncodeOptions::validate`](crate::config::EncodeOptions::validate).
#[inline]
pub fn chunk_bytes(data: &[u8], chunk_size: usize) -> Chunks<'_, u8> {
    data.chunks(chunk_size)
}

/// Number of slices `chunk_bytes` yields for a buffer of `len` bytes
#[inline]
pub fn chunk_count(len: usize, chunk_size: usize) -> usize {
    len.div_ceil(chunk_size)
}
