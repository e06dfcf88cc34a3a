//! # Inbound Ports
//!
//! The capability set shared by every transaction kind.

use crate::domain::errors::ParamsError;
use shared_crypto::{Ed25519Signature, KeyPair};

/// A transaction parameter that can be packed, signed once and rendered.
pub trait Signable {
    /// Canonical bytes the signature covers.
    ///
    /// Fails with a sequencing error while a required field is unset.
    fn pack(&self) -> Result<Vec<u8>, ParamsError>;

    /// Sign the packed payload and freeze the parameter.
    fn sign(&mut self, key_pair: &KeyPair) -> Result<Ed25519Signature, ParamsError>;

    /// JSON submission body. Only available once signed.
    fn to_json(&self) -> Result<String, ParamsError>;

    fn signature(&self) -> Option<&Ed25519Signature>;

    fn is_signed(&self) -> bool {
        self.signature().is_some()
    }
}
