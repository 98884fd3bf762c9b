//! Zero-padded XOR shared by parity generation and recovery

/// XOR `src` into `acc`, treating missing bytes of the shorter buffer as zero
///
/// Bytes of `src` beyond `acc.len()` are ignored, so `acc` must already be
/// sized to the group's parity length.
#[inline]
pub fn xor_into(acc: &mut [u8], src: &[u8]) {
    for (a, b) in acc.iter_mut().zip(src) {
        *a ^= *b;
    }
}

/// XOR two buffers after zero-padding both to `size` bytes
///
/// Either input may be shorter or longer than `size`; the result is always
/// exactly `size` bytes.
pub fn xor_padded(a: &[u8], b: &[u8], size: usize) -> Vec<u8> {
    let mut out = vec![0u8; size];
    xor_into(&mut out, a);
    xor_into(&mut out, b);
    out
}
