//! Hexadecimal helpers.

use crate::EncodingError;

/// Lowercase hex encoding.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    ::hex::encode(bytes)
}

/// Decodes a hex string, rejecting empty input.
pub fn decode(input: &str) -> Result<Vec<u8>, EncodingError> {
    if input.is_empty() {
        return Err(EncodingError::Empty);
    }
    ::hex::decode(input).map_err(|e| EncodingError::InvalidHex(e.to_string()))
}

/// Decodes a hex string that must hold exactly `expected` bytes.
pub fn decode_exact(input: &str, expected: usize) -> Result<Vec<u8>, EncodingError> {
    let bytes = decode(input)?;
    if bytes.len() != expected {
        return Err(EncodingError::InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}
