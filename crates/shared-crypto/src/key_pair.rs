//! Capability-tagged key pairs.
//!
//! A seed yields one signing pair and one encryption pair. Both are carried
//! as [`KeyPair`] so an account can hand either out, and a method that only
//! makes sense for one capability fails with `UnsupportedCapability` on the
//! other instead of silently doing something else.

use crate::boxes::BoxKeyPair;
use crate::signatures::{Ed25519KeyPair, Ed25519Signature};
use crate::CryptoError;
use std::fmt;
use zeroize::Zeroizing;

/// What a key pair is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Ed25519 authentication/signing.
    Signing,
    /// X25519 encryption.
    Encryption,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Signing => f.write_str("signing"),
            Capability::Encryption => f.write_str("encryption"),
        }
    }
}

/// A key pair of one capability.
#[derive(Debug, Clone)]
pub enum KeyPair {
    /// Signing pair.
    Signing(Ed25519KeyPair),
    /// Encryption pair.
    Encryption(BoxKeyPair),
}

impl KeyPair {
    /// Capability of this pair.
    pub fn capability(&self) -> Capability {
        match self {
            KeyPair::Signing(_) => Capability::Signing,
            KeyPair::Encryption(_) => Capability::Encryption,
        }
    }

    /// Public key bytes (32 for both capabilities).
    pub fn public_key(&self) -> [u8; 32] {
        match self {
            KeyPair::Signing(pair) => *pair.public_key().as_bytes(),
            KeyPair::Encryption(pair) => pair.public_key(),
        }
    }

    /// Private key bytes: 64 for signing (`seed | public`), 32 for encryption.
    pub fn private_key(&self) -> Zeroizing<Vec<u8>> {
        match self {
            KeyPair::Signing(pair) => Zeroizing::new(pair.private_key().to_vec()),
            KeyPair::Encryption(pair) => Zeroizing::new(pair.private_key().to_vec()),
        }
    }

    /// Sign a message. Signing pairs only.
    pub fn sign(&self, message: &[u8]) -> Result<Ed25519Signature, CryptoError> {
        match self {
            KeyPair::Signing(pair) => Ok(pair.sign(message)),
            KeyPair::Encryption(_) => Err(self.unsupported("sign")),
        }
    }

    /// X25519 shared secret with a peer. Encryption pairs only.
    pub fn shared_secret(&self, their_public: &[u8]) -> Result<Zeroizing<[u8; 32]>, CryptoError> {
        match self {
            KeyPair::Encryption(pair) => pair.shared_secret(their_public).map(Zeroizing::new),
            KeyPair::Signing(_) => Err(self.unsupported("shared_secret")),
        }
    }

    fn unsupported(&self, operation: &'static str) -> CryptoError {
        CryptoError::UnsupportedCapability {
            operation,
            capability: self.capability(),
        }
    }
}

impl From<Ed25519KeyPair> for KeyPair {
    fn from(pair: Ed25519KeyPair) -> Self {
        KeyPair::Signing(pair)
    }
}

impl From<BoxKeyPair> for KeyPair {
    fn from(pair: BoxKeyPair) -> Self {
        KeyPair::Encryption(pair)
    }
}
