//! Unsigned varint (little-endian base 128).
//!
//! Each byte carries seven value bits, least significant group first; the high
//! bit is set on every byte except the last. Used for account-number key
//! variants, transaction tags and field length prefixes.

use crate::EncodingError;

/// Returns `value` encoded as a varint.
pub fn encode(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(value));
    let mut value = value;

    while value >= 0x80 {
        out.push(0x80 | (value & 0x7f) as u8);
        value >>= 7;
    }
    out.push(value as u8);

    out
}

/// Returns the varint encoding of a `usize`, typically a field length.
pub fn encode_usize(value: usize) -> Vec<u8> {
    encode(value as u64)
}

/// Number of bytes [`encode`] produces for `value`.
pub fn encoded_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.max(1).div_ceil(7)
}

/// Decodes a varint from the start of `bytes`.
///
/// Returns the value and the number of bytes it occupied.
pub fn decode(bytes: &[u8]) -> Result<(u64, usize), EncodingError> {
    let mut out = 0u64;

    for (n, byte) in bytes.iter().enumerate() {
        if 7 * n >= 64 {
            return Err(EncodingError::VarintOverflow);
        }

        let group = u64::from(byte & 0x7f);
        if 7 * n > 57 && group >> (64 - 7 * n) != 0 {
            return Err(EncodingError::VarintOverflow);
        }
        out |= group << (7 * n);

        if byte & 0x80 == 0 {
            // Reject encodings such as `[0x81, 0x00]`.
            if n >= 1 && *byte == 0 {
                return Err(EncodingError::NonMinimalVarint);
            }
            return Ok((out, n + 1));
        }
    }

    Err(EncodingError::TruncatedVarint)
}
