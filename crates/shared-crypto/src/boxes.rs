//! # X25519 Box Keys
//!
//! Encryption key pair, derived from the same seed as the signing pair but
//! through an independent expansion.

use crate::CryptoError;
use std::fmt;
use x25519_dalek::{PublicKey, StaticSecret};

/// X25519 public key length.
pub const BOX_PUBLIC_KEY_LENGTH: usize = 32;

/// X25519 private key length.
pub const BOX_PRIVATE_KEY_LENGTH: usize = 32;

/// X25519 key pair. The secret is zeroized on drop.
#[derive(Clone)]
pub struct BoxKeyPair {
    secret: StaticSecret,
    public: PublicKey,
}

impl BoxKeyPair {
    /// Build a key pair from a 32-byte secret.
    pub fn from_secret(secret: [u8; BOX_PRIVATE_KEY_LENGTH]) -> Self {
        let secret = StaticSecret::from(secret);
        let public = PublicKey::from(&secret);
        Self { secret, public }
    }

    /// Public key bytes.
    pub fn public_key(&self) -> [u8; BOX_PUBLIC_KEY_LENGTH] {
        self.public.to_bytes()
    }

    /// Private key bytes.
    pub fn private_key(&self) -> [u8; BOX_PRIVATE_KEY_LENGTH] {
        self.secret.to_bytes()
    }

    /// X25519 shared secret with a peer's public key.
    pub fn shared_secret(&self, their_public: &[u8]) -> Result<[u8; 32], CryptoError> {
        let bytes: [u8; BOX_PUBLIC_KEY_LENGTH] =
            their_public
                .try_into()
                .map_err(|_| CryptoError::InvalidKeyLength {
                    expected: BOX_PUBLIC_KEY_LENGTH,
                    actual: their_public.len(),
                })?;
        let shared = self.secret.diffie_hellman(&PublicKey::from(bytes));
        Ok(shared.to_bytes())
    }
}

impl fmt::Debug for BoxKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxKeyPair")
            .field("public_key", &self.public.as_bytes())
            .finish_non_exhaustive()
    }
}
