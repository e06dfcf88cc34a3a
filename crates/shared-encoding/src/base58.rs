//! Base58 (Bitcoin alphabet), the textual form of encoded seeds and account
//! numbers.

use crate::EncodingError;

/// Encodes bytes as Base58.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    bs58::encode(bytes).into_string()
}

/// Decodes a Base58 string, rejecting empty input.
pub fn decode(input: &str) -> Result<Vec<u8>, EncodingError> {
    if input.is_empty() {
        return Err(EncodingError::Empty);
    }
    bs58::decode(input)
        .into_vec()
        .map_err(|e| EncodingError::InvalidBase58(e.to_string()))
}
