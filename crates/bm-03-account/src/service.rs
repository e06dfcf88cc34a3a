//! # Account Service
//!
//! `Account` owns its seed and both derived key pairs. Nothing is cached
//! globally; dropping the account drops (and zeroizes) the secrets.

use crate::domain::errors::AccountError;
use crate::ports::inbound::AccountApi;
use bm_01_seed::{self as seed_codec, Locale, RecoveryPhrase, Seed, SeedVersion};
use bm_02_address::Address;
use shared_crypto::{signer, Ed25519Signature, Ed25519PublicKey, KeyPair};
use shared_types::Network;
use tracing::{debug, warn};

/// A loaded account.
#[derive(Debug, Clone)]
pub struct Account {
    seed: Seed,
    auth_key_pair: KeyPair,
    enc_key_pair: KeyPair,
    address: Address,
}

impl Account {
    /// Fresh account on `network`, backed by a new version 2 seed.
    pub fn new(network: Network) -> Result<Self, AccountError> {
        Self::from_seed(Seed::generate(network, SeedVersion::V2), network)
    }

    /// Load from a seed that must belong to `network`.
    pub fn from_seed(seed: Seed, network: Network) -> Result<Self, AccountError> {
        if seed.network() != network {
            warn!(expected = %network, actual = %seed.network(), "seed belongs to another network");
            return Err(AccountError::NetworkMismatch {
                expected: network,
                actual: seed.network(),
            });
        }

        let (auth_key_pair, enc_key_pair) = seed_codec::derive(&seed)?;
        let public_key = Ed25519PublicKey::from_bytes(auth_key_pair.public_key())?;
        let address = Address::from_public_key(public_key, network);

        debug!(
            network = %network,
            version = seed.version().value(),
            account = %address,
            "loaded account"
        );
        Ok(Self {
            seed,
            auth_key_pair,
            enc_key_pair,
            address,
        })
    }

    pub fn from_encoded_seed(encoded: &str, network: Network) -> Result<Self, AccountError> {
        Self::from_seed(seed_codec::decode(encoded)?, network)
    }

    /// Load from recovery phrase words (12 or 24, any supported locale).
    pub fn from_recovery_phrase<S: AsRef<str>>(
        words: &[S],
        network: Network,
    ) -> Result<Self, AccountError> {
        let phrase = RecoveryPhrase::from_words(words)?;
        Self::from_seed(phrase.to_seed()?, network)
    }

    /// Check `signature` over `message` against the key in `account_number`.
    ///
    /// A well-formed signature that does not verify gives `Ok(false)`.
    pub fn verify(
        account_number: &str,
        signature: &[u8],
        message: &[u8],
        network: Network,
    ) -> Result<bool, AccountError> {
        let address = Address::decode(account_number, network)?;
        Ok(signer::verify(
            signature,
            message,
            address.public_key().as_bytes(),
        )?)
    }

    pub fn is_valid_account_number(account_number: &str, network: Network) -> bool {
        Address::is_valid_account_number(account_number, network)
    }

    pub fn parse_account_number(account_number: &str, network: Network) -> Result<Address, AccountError> {
        Ok(Address::decode(account_number, network)?)
    }
}

impl AccountApi for Account {
    fn network(&self) -> Network {
        self.address.network()
    }

    fn seed(&self) -> &Seed {
        &self.seed
    }

    fn account_number(&self) -> String {
        self.address.account_number()
    }

    fn address(&self) -> &Address {
        &self.address
    }

    fn auth_key_pair(&self) -> &KeyPair {
        &self.auth_key_pair
    }

    fn enc_key_pair(&self) -> &KeyPair {
        &self.enc_key_pair
    }

    fn recovery_phrase(&self, locale: Locale) -> RecoveryPhrase {
        RecoveryPhrase::from_seed(&self.seed, locale)
    }

    fn encoded_seed(&self) -> String {
        seed_codec::encode(&self.seed)
    }

    fn sign(&self, message: &[u8]) -> Result<Ed25519Signature, AccountError> {
        Ok(signer::sign(&self.auth_key_pair, message)?)
    }
}
