//! # Address Subsystem (BM-02)
//!
//! Account numbers: a network-qualified, checksummed Base58 rendering of an
//! Ed25519 public key.
//!
//! ```text
//! varint(keyVariant) | publicKey(32) | checksum(4)
//!
//! keyVariant = keyType << 4 | network << 1 | keyPart
//! ```
//!
//! Decoding re-runs every check. An account number is never trusted just
//! because it parses as Base58.

pub mod domain;

// Re-export public API
pub use domain::address::{key_variant, Address, ADDRESS_PUBLIC_KEY_LENGTH};
pub use domain::errors::AddressError;
