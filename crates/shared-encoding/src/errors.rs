//! Encoding error types.

use shared_types::ErrorKind;
use thiserror::Error;

/// Byte-codec errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// Input string was empty
    #[error("Empty input")]
    Empty,

    /// Input was not valid hexadecimal
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Input was not valid Base58
    #[error("Invalid base58: {0}")]
    InvalidBase58(String),

    /// Decoded value had an unexpected length
    #[error("Invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Varint ran past the end of the buffer
    #[error("Truncated varint")]
    TruncatedVarint,

    /// Varint does not fit in 64 bits
    #[error("Varint overflow")]
    VarintOverflow,

    /// Varint has redundant trailing zero groups
    #[error("Non-minimal varint encoding")]
    NonMinimalVarint,

    /// Slice range outside the buffer
    #[error("Slice {start}..{end} out of bounds for length {len}")]
    OutOfBounds {
        /// Range start
        start: usize,
        /// Range end
        end: usize,
        /// Buffer length
        len: usize,
    },
}

impl EncodingError {
    /// Class of this failure.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Malformed
    }
}
