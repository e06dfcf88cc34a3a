//! Array helpers for fixed-layout records.

use crate::EncodingError;

/// Concatenates byte slices in order.
pub fn concat(parts: &[&[u8]]) -> Vec<u8> {
    let len = parts.iter().map(|p| p.len()).sum();
    let mut out = Vec::with_capacity(len);
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

/// Bounds-checked `bytes[start..end]`.
pub fn slice(bytes: &[u8], start: usize, end: usize) -> Result<&[u8], EncodingError> {
    bytes.get(start..end).ok_or(EncodingError::OutOfBounds {
        start,
        end,
        len: bytes.len(),
    })
}

/// Splits a record into `(body, checksum)` where the checksum is the trailing
/// `checksum_len` bytes.
pub fn split_checksum(bytes: &[u8], checksum_len: usize) -> Result<(&[u8], &[u8]), EncodingError> {
    if bytes.len() < checksum_len {
        return Err(EncodingError::InvalidLength {
            expected: checksum_len,
            actual: bytes.len(),
        });
    }
    Ok(bytes.split_at(bytes.len() - checksum_len))
}

/// Compares two byte strings without early exit.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
