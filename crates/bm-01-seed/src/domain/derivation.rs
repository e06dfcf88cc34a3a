//! # Key Derivation
//!
//! A seed expands into two key pairs through independent one-way functions,
//! separated by a 16-byte big-endian counter per capability:
//!
//! | Version | Expansion |
//! |---------|-----------|
//! | 1 | `secretbox(key = core, nonce = 0, message = counter)` |
//! | 2 | `SHA3-256(core \| counter)` |
//!
//! The 32-byte result seeds Ed25519 (signing) or is the X25519 secret
//! (encryption). Neither pair reveals the other without the seed.

use crate::domain::errors::SeedError;
use crate::domain::seed::{Seed, SeedVersion};
use shared_crypto::{seal_counter, sha3_256_many, BoxKeyPair, Ed25519KeyPair, KeyPair};
use tracing::debug;
use zeroize::Zeroizing;

/// Counter for the signing (authentication) pair.
pub const AUTH_KEY_COUNTER: [u8; 16] = counter(0x03e7);

/// Counter for the encryption pair.
pub const ENC_KEY_COUNTER: [u8; 16] = counter(0x03e8);

const fn counter(value: u16) -> [u8; 16] {
    let mut out = [0u8; 16];
    out[14] = (value >> 8) as u8;
    out[15] = value as u8;
    out
}

/// Derive `(signing, encryption)` key pairs. Deterministic in the seed.
pub fn derive(seed: &Seed) -> Result<(KeyPair, KeyPair), SeedError> {
    let auth = expand(seed, &AUTH_KEY_COUNTER)?;
    let enc = expand(seed, &ENC_KEY_COUNTER)?;

    let signing = KeyPair::from(Ed25519KeyPair::from_seed(&auth));
    let encryption = KeyPair::from(BoxKeyPair::from_secret(*enc));

    debug!(
        version = seed.version().value(),
        network = %seed.network(),
        "derived key pairs"
    );
    Ok((signing, encryption))
}

fn expand(seed: &Seed, counter: &[u8; 16]) -> Result<Zeroizing<[u8; 32]>, SeedError> {
    match seed.version() {
        SeedVersion::V1 => {
            let key: Zeroizing<[u8; 32]> =
                Zeroizing::new(seed.core().try_into().map_err(|_| SeedError::InvalidLength {
                    version: seed.version().value(),
                    expected: 32,
                    actual: seed.core().len(),
                })?);
            Ok(Zeroizing::new(seal_counter(&key, counter)?))
        }
        SeedVersion::V2 => Ok(Zeroizing::new(sha3_256_many(&[seed.core(), counter]))),
    }
}
