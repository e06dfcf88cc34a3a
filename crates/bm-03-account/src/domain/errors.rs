//! # Account Errors

use bm_01_seed::SeedError;
use bm_02_address::AddressError;
use shared_crypto::CryptoError;
use shared_types::{ErrorKind, Network};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Seed was issued for another network
    #[error("Seed network mismatch: expected {expected}, got {actual}")]
    NetworkMismatch { expected: Network, actual: Network },
}

impl AccountError {
    /// Class of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::Seed(e) => e.kind(),
            AccountError::Address(e) => e.kind(),
            AccountError::Crypto(e) => e.kind(),
            AccountError::NetworkMismatch { .. } => ErrorKind::NetworkMismatch,
        }
    }
}
