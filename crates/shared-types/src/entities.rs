//! # Core Entities
//!
//! Network identifiers and the key discriminators embedded in encoded seeds
//! and account numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 32-byte SHA3-256 digest.
pub type Hash = [u8; 32];

/// Byte length of a SHA3-256 digest (transaction links, checksums).
pub const HASH_LENGTH: usize = 32;

/// Byte length of a SHA3-512 digest (asset identifiers).
pub const ASSET_ID_LENGTH: usize = 64;

/// Number of leading hash bytes kept as a checksum in encoded seeds and
/// account numbers.
pub const CHECKSUM_LENGTH: usize = 4;

/// Key algorithm tag carried in the key variant of an account number.
pub const KEY_TYPE_ED25519: u64 = 0x01;

/// The ledger network a seed or account belongs to.
///
/// The discriminant is the on-wire value: it is the network byte of an
/// encoded seed and the network bit of an account-number key variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Production network.
    Livenet = 0x00,
    /// Test network.
    #[default]
    Testnet = 0x01,
}

impl Network {
    /// On-wire value of this network.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Map an on-wire value back to a network, if it names one.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Network::Livenet),
            0x01 => Some(Network::Testnet),
            _ => None,
        }
    }

    /// Lowercase name used in configuration and logs.
    pub fn name(self) -> &'static str {
        match self {
            Network::Livenet => "livenet",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "livenet" | "live" | "mainnet" => Ok(Network::Livenet),
            "testnet" | "test" => Ok(Network::Testnet),
            other => Err(format!("Invalid network: {}. Allowed: livenet, testnet", other)),
        }
    }
}

/// Which half of a key pair an encoded key variant refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPart {
    /// Private key variant (never a valid account number).
    PrivateKey = 0x00,
    /// Public key variant.
    PublicKey = 0x01,
}

impl KeyPart {
    /// On-wire bit value.
    pub fn value(self) -> u64 {
        self as u64
    }
}
