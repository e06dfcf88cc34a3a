//! # SHA3 Hashing
//!
//! SHA3-256 is the ledger's hash: checksums of encoded seeds and account
//! numbers, transaction links, mnemonic check bits. SHA3-512 produces asset
//! identifiers.

use sha3::{Digest, Sha3_256, Sha3_512};
use shared_types::{Hash, CHECKSUM_LENGTH};

/// Hash data with SHA3-256.
pub fn sha3_256(data: &[u8]) -> Hash {
    Sha3_256::digest(data).into()
}

/// Hash the concatenation of several inputs with SHA3-256.
pub fn sha3_256_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Sha3_256::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize().into()
}

/// Hash data with SHA3-512.
pub fn sha3_512(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&Sha3_512::digest(data));
    out
}

/// Leading [`CHECKSUM_LENGTH`] bytes of the SHA3-256 of `data`.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let hash = sha3_256(data);
    let mut out = [0u8; CHECKSUM_LENGTH];
    out.copy_from_slice(&hash[..CHECKSUM_LENGTH]);
    out
}
