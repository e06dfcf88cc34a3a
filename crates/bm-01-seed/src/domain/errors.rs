//! # Seed Errors
//!
//! Error types for seed encoding, recovery phrases and key derivation.

use shared_crypto::CryptoError;
use shared_encoding::EncodingError;
use shared_types::ErrorKind;
use thiserror::Error;

/// Errors raised while building, encoding or recovering a seed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SeedError {
    /// Byte-level decoding failed (Base58, empty input)
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Key expansion or key construction failed
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Core bytes do not fit the requested version
    #[error("Invalid seed length for version {version}: expected {expected}, got {actual}")]
    InvalidLength {
        version: u8,
        expected: usize,
        actual: usize,
    },

    /// Decoded token is neither a version 1 nor a version 2 seed
    #[error("Invalid encoded seed length: {0}")]
    InvalidEncodedLength(usize),

    #[error("Unsupported seed version: {0}")]
    UnsupportedVersion(u8),

    #[error("Bad seed magic")]
    BadMagic,

    /// Trailing checksum does not match the token body
    #[error("Seed checksum mismatch")]
    ChecksumMismatch,

    #[error("Unknown network byte: {0:#04x}")]
    UnknownNetwork(u8),

    /// Version byte disagrees with the token length
    #[error("Seed version {version} does not match encoded length {length}")]
    VersionLengthMismatch { version: u8, length: usize },

    #[error("Empty recovery phrase")]
    EmptyPhrase,

    /// Only 12 and 24 word phrases exist
    #[error("Invalid recovery phrase length: {0} words")]
    InvalidWordCount(usize),

    #[error("Word not in wordlist: {0}")]
    UnknownWord(String),

    /// Check bits recomputed from the words disagree with the phrase
    #[error("Recovery phrase checksum mismatch")]
    PhraseChecksumMismatch,
}

impl SeedError {
    /// Class of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SeedError::Encoding(e) => e.kind(),
            SeedError::Crypto(e) => e.kind(),
            SeedError::ChecksumMismatch | SeedError::PhraseChecksumMismatch => {
                ErrorKind::Integrity
            }
            _ => ErrorKind::Malformed,
        }
    }
}
