//! # Transaction Errors

use shared_crypto::CryptoError;
use shared_types::ErrorKind;
use thiserror::Error;

/// Errors raised while building, signing or rendering transaction parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Link is not 64 hex characters
    #[error("Invalid link: {0}")]
    InvalidLink(String),

    /// Asset id is not 128 hex characters
    #[error("Invalid asset id: {0}")]
    InvalidAssetId(String),

    #[error("Invalid asset name: {0}")]
    InvalidName(String),

    #[error("Invalid metadata: {0}")]
    InvalidMetadata(String),

    #[error("Invalid fingerprint: {0}")]
    InvalidFingerprint(String),

    /// Signature text is not hex
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Offer id must not be empty")]
    EmptyOfferId,

    /// Signing key is not the key the parameter names
    #[error("Signer does not match the {0} of this transaction")]
    SignerMismatch(&'static str),

    /// Required field not set before packing or signing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// `to_json` called before `sign`
    #[error("Transaction is not signed")]
    Unsigned,

    /// Signed parameters are immutable
    #[error("Transaction is already signed")]
    AlreadySigned,

    #[error("JSON rendering failed: {0}")]
    Json(String),
}

impl ParamsError {
    /// Class of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParamsError::Crypto(e) => e.kind(),
            ParamsError::MissingField(_) | ParamsError::Unsigned | ParamsError::AlreadySigned => {
                ErrorKind::Sequencing
            }
            _ => ErrorKind::Malformed,
        }
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(e: serde_json::Error) -> Self {
        ParamsError::Json(e.to_string())
    }
}
