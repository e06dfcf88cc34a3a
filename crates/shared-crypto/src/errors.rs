//! Crypto error types.

use crate::key_pair::Capability;
use shared_types::ErrorKind;
use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Invalid key length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Invalid signature length
    #[error("Invalid signature length: expected {expected}, got {actual}")]
    InvalidSignatureLength {
        /// Expected signature length in bytes
        expected: usize,
        /// Actual signature length in bytes
        actual: usize,
    },

    /// Invalid public key
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Signature verification failed
    #[error("Signature verification failed")]
    SignatureVerificationFailed,

    /// Private and public halves of a key pair disagree
    #[error("Key pair halves do not match")]
    KeyPairMismatch,

    /// Operation not available for this key capability
    #[error("{operation} is not supported by a {capability} key pair")]
    UnsupportedCapability {
        /// Operation that was attempted
        operation: &'static str,
        /// Capability of the key pair it was attempted on
        capability: Capability,
    },

    /// Secret-box sealing failed
    #[error("Key expansion failed: {0}")]
    KeyExpansionFailed(String),
}

impl CryptoError {
    /// Class of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CryptoError::UnsupportedCapability { .. } => ErrorKind::Unsupported,
            CryptoError::SignatureVerificationFailed => ErrorKind::Integrity,
            _ => ErrorKind::Malformed,
        }
    }
}
