//! # Address Errors

use shared_crypto::CryptoError;
use shared_encoding::EncodingError;
use shared_types::{ErrorKind, Network};
use thiserror::Error;

/// Errors raised while building or decoding an account number.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Public key bytes are not a valid Ed25519 point or have the wrong length
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Decoded account number is not one variant byte, a key and a checksum
    #[error("Invalid account number length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Unknown key type in key variant {0:#x}")]
    UnknownKeyType(u64),

    #[error("Account number checksum mismatch")]
    ChecksumMismatch,

    /// Bits 2 and 3 of the key variant are set
    #[error("Reserved bits set in key variant {0:#x}")]
    ReservedBitsSet(u64),

    /// Key variant marks a private key
    #[error("Key variant does not describe a public key")]
    NotPublicKey,

    #[error("Network mismatch: expected {expected}, got {actual}")]
    NetworkMismatch { expected: Network, actual: Network },
}

impl AddressError {
    /// Class of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AddressError::Encoding(e) => e.kind(),
            AddressError::Crypto(e) => e.kind(),
            AddressError::ChecksumMismatch => ErrorKind::Integrity,
            AddressError::NetworkMismatch { .. } => ErrorKind::NetworkMismatch,
            _ => ErrorKind::Malformed,
        }
    }
}
