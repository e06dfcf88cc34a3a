//! # Seed Codec
//!
//! Base58 token layout:
//!
//! ```text
//! magic(2) | version(1) | network(1) | core(16 or 32) | checksum(4)
//! ```
//!
//! `checksum` is the first four bytes of SHA3-256 over everything before it.
//! Decoding never corrects anything: a token either passes every check or is
//! rejected.

use crate::domain::errors::SeedError;
use crate::domain::seed::{Seed, SeedVersion};
use shared_crypto::checksum;
use shared_encoding::{base58, bytes};
use shared_types::{Network, CHECKSUM_LENGTH};
use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Leading marker of every encoded seed.
pub const SEED_MAGIC: [u8; 2] = [0x5a, 0xfe];

/// Encode a seed as its Base58 token.
pub fn encode(seed: &Seed) -> String {
    let body = Zeroizing::new(bytes::concat(&[
        &SEED_MAGIC,
        &[seed.version().value(), seed.network().value()],
        seed.core(),
    ]));
    let sum = checksum(&body);
    let token = Zeroizing::new(bytes::concat(&[body.as_slice(), &sum]));
    base58::encode(token.as_slice())
}

/// Decode and validate a Base58 seed token.
///
/// Checks run in order: length, checksum, magic, version, network. Any
/// same-length corruption therefore surfaces as a checksum mismatch.
pub fn decode(encoded: &str) -> Result<Seed, SeedError> {
    let raw = Zeroizing::new(base58::decode(encoded.trim())?);

    let by_length =
        SeedVersion::from_encoded_len(raw.len()).ok_or(SeedError::InvalidEncodedLength(raw.len()))?;

    let (body, sum) = bytes::split_checksum(&raw, CHECKSUM_LENGTH)?;
    if !bytes::constant_time_eq(&checksum(body), sum) {
        warn!(len = raw.len(), "encoded seed checksum mismatch");
        return Err(SeedError::ChecksumMismatch);
    }

    if bytes::slice(body, 0, SEED_MAGIC.len())? != SEED_MAGIC {
        return Err(SeedError::BadMagic);
    }

    let version_byte = body[2];
    let version =
        SeedVersion::from_value(version_byte).ok_or(SeedError::UnsupportedVersion(version_byte))?;
    if version != by_length {
        return Err(SeedError::VersionLengthMismatch {
            version: version_byte,
            length: raw.len(),
        });
    }

    let network_byte = body[3];
    let network = Network::from_value(network_byte).ok_or(SeedError::UnknownNetwork(network_byte))?;

    let seed = Seed::new(bytes::slice(body, 4, body.len())?, network, version.value())?;
    debug!(version = version.value(), network = %network, "decoded seed");
    Ok(seed)
}
