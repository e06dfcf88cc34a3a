//! # Seed
//!
//! The root secret of an account: random core bytes plus the version that
//! fixes their length and the network the account lives on.
//!
//! ## Security
//!
//! The core is zeroized on drop and never printed by `Debug`.

use crate::domain::errors::SeedError;
use rand::RngCore;
use shared_encoding::bytes::constant_time_eq;
use shared_types::Network;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Seed format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedVersion {
    /// 32-byte core, 24-word phrase.
    V1 = 0x01,
    /// 16-byte core, 12-word phrase.
    V2 = 0x02,
}

impl SeedVersion {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(SeedVersion::V1),
            0x02 => Some(SeedVersion::V2),
            _ => None,
        }
    }

    pub fn core_len(self) -> usize {
        match self {
            SeedVersion::V1 => 32,
            SeedVersion::V2 => 16,
        }
    }

    pub fn word_count(self) -> usize {
        match self {
            SeedVersion::V1 => 24,
            SeedVersion::V2 => 12,
        }
    }

    /// Length of the Base58-decoded token: magic, version, network, core, checksum.
    pub fn encoded_len(self) -> usize {
        2 + 1 + 1 + self.core_len() + 4
    }

    pub fn from_encoded_len(len: usize) -> Option<Self> {
        [SeedVersion::V1, SeedVersion::V2]
            .into_iter()
            .find(|v| v.encoded_len() == len)
    }

    pub fn from_word_count(count: usize) -> Option<Self> {
        [SeedVersion::V1, SeedVersion::V2]
            .into_iter()
            .find(|v| v.word_count() == count)
    }
}

/// Versioned seed bound to a network. Immutable once built.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    core: Vec<u8>,
    #[zeroize(skip)]
    version: SeedVersion,
    #[zeroize(skip)]
    network: Network,
}

impl Seed {
    /// Build a seed, checking the core length against the version.
    pub fn new(core: &[u8], network: Network, version: u8) -> Result<Self, SeedError> {
        let version = SeedVersion::from_value(version).ok_or(SeedError::UnsupportedVersion(version))?;
        if core.len() != version.core_len() {
            return Err(SeedError::InvalidLength {
                version: version.value(),
                expected: version.core_len(),
                actual: core.len(),
            });
        }
        Ok(Self {
            core: core.to_vec(),
            version,
            network,
        })
    }

    /// Fresh seed from the OS RNG.
    pub fn generate(network: Network, version: SeedVersion) -> Self {
        let mut core = vec![0u8; version.core_len()];
        rand::rngs::OsRng.fill_bytes(&mut core);
        Self {
            core,
            version,
            network,
        }
    }

    pub fn core(&self) -> &[u8] {
        &self.core
    }

    pub fn version(&self) -> SeedVersion {
        self.version
    }

    pub fn network(&self) -> Network {
        self.network
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.network == other.network
            && constant_time_eq(&self.core, &other.core)
    }
}

impl Eq for Seed {}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("core", &"***")
            .field("version", &self.version)
            .field("network", &self.network)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ErrorKind;

    #[test]
    fn test_new_checks_core_length() {
        assert!(Seed::new(&[0u8; 32], Network::Testnet, 1).is_ok());
        assert!(Seed::new(&[0u8; 16], Network::Testnet, 2).is_ok());

        let err = Seed::new(&[0u8; 16], Network::Testnet, 1).unwrap_err();
        assert_eq!(
            err,
            SeedError::InvalidLength {
                version: 1,
                expected: 32,
                actual: 16
            }
        );
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn test_new_rejects_unknown_version() {
        assert_eq!(
            Seed::new(&[0u8; 32], Network::Testnet, 0),
            Err(SeedError::UnsupportedVersion(0))
        );
        assert_eq!(
            Seed::new(&[0u8; 32], Network::Testnet, 3),
            Err(SeedError::UnsupportedVersion(3))
        );
    }

    #[test]
    fn test_generate_sizes() {
        let v1 = Seed::generate(Network::Livenet, SeedVersion::V1);
        let v2 = Seed::generate(Network::Livenet, SeedVersion::V2);
        assert_eq!(v1.core().len(), 32);
        assert_eq!(v2.core().len(), 16);
        assert_ne!(v1.core(), &[0u8; 32]);
    }

    #[test]
    fn test_version_tables() {
        assert_eq!(SeedVersion::V1.encoded_len(), 40);
        assert_eq!(SeedVersion::V2.encoded_len(), 24);
        assert_eq!(SeedVersion::from_encoded_len(24), Some(SeedVersion::V2));
        assert_eq!(SeedVersion::from_encoded_len(36), None);
        assert_eq!(SeedVersion::from_word_count(24), Some(SeedVersion::V1));
        assert_eq!(SeedVersion::from_word_count(18), None);
    }

    #[test]
    fn test_debug_redacts_core() {
        let seed = Seed::new(&[0xab; 32], Network::Testnet, 1).unwrap();
        let printed = format!("{:?}", seed);
        assert!(!printed.contains("171"));
        assert!(!printed.contains("ab"));
        assert!(printed.contains("***"));
    }

    #[test]
    fn test_equality_covers_network() {
        let a = Seed::new(&[1u8; 16], Network::Testnet, 2).unwrap();
        let b = Seed::new(&[1u8; 16], Network::Livenet, 2).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
