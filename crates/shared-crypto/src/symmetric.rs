//! # Secret-Box Key Expansion
//!
//! Version-1 seeds expand into key material by sealing a fixed 16-byte
//! counter with NaCl `crypto_secretbox` (XSalsa20-Poly1305) under the seed,
//! with an all-zero nonce. The 32-byte box (`tag | ciphertext`) is the key
//! material; a different counter gives an independent key.

use crate::CryptoError;
use crypto_secretbox::aead::{AeadInPlace, KeyInit, Nonce};
use crypto_secretbox::XSalsa20Poly1305;

/// Poly1305 tag length.
pub const TAG_LENGTH: usize = 16;

/// Counter length (one XSalsa20 half-block).
pub const COUNTER_LENGTH: usize = 16;

/// Seal `counter` under `key` with a zero nonce and return `tag | ciphertext`.
///
/// # Errors
///
/// Returns `CryptoError::KeyExpansionFailed` if the cipher rejects the input.
pub fn seal_counter(key: &[u8; 32], counter: &[u8; COUNTER_LENGTH]) -> Result<[u8; 32], CryptoError> {
    let cipher = XSalsa20Poly1305::new_from_slice(key)
        .map_err(|e| CryptoError::KeyExpansionFailed(e.to_string()))?;
    let nonce = Nonce::<XSalsa20Poly1305>::default();

    let mut buffer = *counter;
    let tag = cipher
        .encrypt_in_place_detached(&nonce, b"", &mut buffer)
        .map_err(|e| CryptoError::KeyExpansionFailed(e.to_string()))?;

    let mut sealed = [0u8; TAG_LENGTH + COUNTER_LENGTH];
    sealed[..TAG_LENGTH].copy_from_slice(&tag);
    sealed[TAG_LENGTH..].copy_from_slice(&buffer);
    Ok(sealed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(last: u8) -> [u8; COUNTER_LENGTH] {
        let mut c = [0u8; COUNTER_LENGTH];
        c[COUNTER_LENGTH - 1] = last;
        c
    }

    #[test]
    fn test_deterministic() {
        let key = [0x42u8; 32];
        assert_eq!(
            seal_counter(&key, &counter(1)).unwrap(),
            seal_counter(&key, &counter(1)).unwrap()
        );
    }

    #[test]
    fn test_counter_separates_output() {
        let key = [0x42u8; 32];
        assert_ne!(
            seal_counter(&key, &counter(1)).unwrap(),
            seal_counter(&key, &counter(2)).unwrap()
        );
    }

    #[test]
    fn test_key_separates_output() {
        assert_ne!(
            seal_counter(&[1u8; 32], &counter(1)).unwrap(),
            seal_counter(&[2u8; 32], &counter(1)).unwrap()
        );
    }
}
