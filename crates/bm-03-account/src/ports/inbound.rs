//! # Inbound Ports
//!
//! The account API as seen by callers.

use crate::domain::errors::AccountError;
use bm_01_seed::{Locale, RecoveryPhrase, Seed};
use bm_02_address::Address;
use shared_crypto::{Ed25519Signature, KeyPair};
use shared_types::Network;

/// Operations available on a loaded account.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait AccountApi: Send + Sync {
    fn network(&self) -> Network;

    fn seed(&self) -> &Seed;

    /// Base58 account number of the signing public key.
    fn account_number(&self) -> String;

    fn address(&self) -> &Address;

    /// Signing (authentication) key pair.
    fn auth_key_pair(&self) -> &KeyPair;

    /// Encryption key pair.
    fn enc_key_pair(&self) -> &KeyPair;

    /// Recovery phrase in `locale`. 24 words for a version 1 seed, 12 for
    /// version 2.
    fn recovery_phrase(&self, locale: Locale) -> RecoveryPhrase;

    /// Base58 seed token.
    fn encoded_seed(&self) -> String;

    /// Sign `message` with the authentication key.
    fn sign(&self, message: &[u8]) -> Result<Ed25519Signature, AccountError>;
}
