//! Stateless sign/verify over raw bytes.
//!
//! Lengths are checked up front so a truncated key or signature fails with a
//! descriptive error instead of reaching the curve code.

use crate::key_pair::KeyPair;
use crate::signatures::{Ed25519PublicKey, Ed25519Signature};
use crate::CryptoError;

/// Sign `message` with a signing-capability key pair.
pub fn sign(key_pair: &KeyPair, message: &[u8]) -> Result<Ed25519Signature, CryptoError> {
    key_pair.sign(message)
}

/// Verify `signature` over `message` against `public_key`.
///
/// Returns `Ok(false)` for a well-formed signature that does not verify, and
/// an error when the signature or key is malformed.
pub fn verify(signature: &[u8], message: &[u8], public_key: &[u8]) -> Result<bool, CryptoError> {
    let signature = Ed25519Signature::from_slice(signature)?;
    let public_key = Ed25519PublicKey::from_slice(public_key)?;

    match public_key.verify(message, &signature) {
        Ok(()) => Ok(true),
        Err(CryptoError::SignatureVerificationFailed) => Ok(false),
        Err(e) => Err(e),
    }
}
