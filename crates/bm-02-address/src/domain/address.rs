//! # Address
//!
//! Public key plus network, and the account number that encodes them.

use crate::domain::errors::AddressError;
use serde::{Serialize, Serializer};
use shared_crypto::{checksum, Ed25519PublicKey, ED25519_PUBLIC_KEY_LENGTH};
use shared_encoding::{base58, bytes, varint};
use shared_types::{KeyPart, Network, CHECKSUM_LENGTH, KEY_TYPE_ED25519};
use std::fmt;
use tracing::{debug, warn};

pub const ADDRESS_PUBLIC_KEY_LENGTH: usize = ED25519_PUBLIC_KEY_LENGTH;

const KEY_PART_MASK: u64 = 0x01;
const NETWORK_SHIFT: u64 = 1;
const KEY_TYPE_SHIFT: u64 = 4;
/// Bits 2 and 3 sit between the network bit and the key type; always zero.
const RESERVED_MASK: u64 = 0x0c;

/// Decoded account number: one variant byte, the public key, the checksum.
const ENCODED_LENGTH: usize = 1 + ADDRESS_PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH;

/// Key variant of a public Ed25519 key on `network`.
pub fn key_variant(network: Network) -> u64 {
    (KEY_TYPE_ED25519 << KEY_TYPE_SHIFT)
        | ((network.value() as u64) << NETWORK_SHIFT)
        | KeyPart::PublicKey.value()
}

/// Network named by a decoded key variant. Every known variant fits in one
/// varint byte; anything wider names an unknown key type.
fn network_of(variant: u64, variant_len: usize) -> Result<Network, AddressError> {
    if variant_len != 1 {
        return Err(AddressError::UnknownKeyType(variant));
    }
    if variant & RESERVED_MASK != 0 {
        return Err(AddressError::ReservedBitsSet(variant));
    }
    if variant & KEY_PART_MASK != KeyPart::PublicKey.value() {
        return Err(AddressError::NotPublicKey);
    }
    if variant >> KEY_TYPE_SHIFT != KEY_TYPE_ED25519 {
        return Err(AddressError::UnknownKeyType(variant));
    }
    if (variant >> NETWORK_SHIFT) & 0x01 == 1 {
        Ok(Network::Testnet)
    } else {
        Ok(Network::Livenet)
    }
}

/// A validated (public key, network) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    public_key: Ed25519PublicKey,
    network: Network,
}

impl Address {
    /// Validated factory from raw public key bytes.
    pub fn new(public_key: &[u8], network: Network) -> Result<Self, AddressError> {
        let public_key = Ed25519PublicKey::from_slice(public_key)?;
        Ok(Self::from_public_key(public_key, network))
    }

    pub fn from_public_key(public_key: Ed25519PublicKey, network: Network) -> Self {
        Self {
            public_key,
            network,
        }
    }

    pub fn public_key(&self) -> &Ed25519PublicKey {
        &self.public_key
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn key_variant(&self) -> u64 {
        key_variant(self.network)
    }

    /// `varint(keyVariant)`
    pub fn prefix(&self) -> Vec<u8> {
        varint::encode(self.key_variant())
    }

    /// Binary form used inside transaction payloads: `prefix | publicKey`.
    pub fn pack(&self) -> Vec<u8> {
        bytes::concat(&[&self.prefix(), self.public_key.as_bytes()])
    }

    /// Base58 account number.
    pub fn account_number(&self) -> String {
        let packed = self.pack();
        let sum = checksum(&packed);
        base58::encode(bytes::concat(&[&packed, &sum]))
    }

    /// Decode an account number and require it to belong to `network`.
    pub fn decode(account_number: &str, network: Network) -> Result<Self, AddressError> {
        let address = Self::parse(account_number)?;
        if address.network != network {
            warn!(
                expected = %network,
                actual = %address.network,
                "account number belongs to another network"
            );
            return Err(AddressError::NetworkMismatch {
                expected: network,
                actual: address.network,
            });
        }
        Ok(address)
    }

    /// Decode an account number on whichever network it names.
    ///
    /// Checks run in order: Base58, total length, checksum, key variant,
    /// public key. Any same-length corruption therefore surfaces as a
    /// checksum mismatch.
    pub fn parse(account_number: &str) -> Result<Self, AddressError> {
        let raw = base58::decode(account_number.trim())?;
        if raw.len() != ENCODED_LENGTH {
            return Err(AddressError::InvalidLength {
                expected: ENCODED_LENGTH,
                actual: raw.len(),
            });
        }

        let (body, sum) = bytes::split_checksum(&raw, CHECKSUM_LENGTH)?;
        if !bytes::constant_time_eq(&checksum(body), sum) {
            warn!("account number checksum mismatch");
            return Err(AddressError::ChecksumMismatch);
        }

        let (variant, variant_len) = varint::decode(body)?;
        let network = network_of(variant, variant_len)?;
        let key = bytes::slice(body, variant_len, body.len())?;
        let public_key = Ed25519PublicKey::from_slice(key)?;

        debug!(network = %network, "decoded account number");
        Ok(Self::from_public_key(public_key, network))
    }

    /// Whether `account_number` decodes cleanly on `network`.
    pub fn is_valid_account_number(account_number: &str, network: Network) -> bool {
        Self::decode(account_number, network).is_ok()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.account_number())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.account_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shared_types::ErrorKind;

    const TESTNET_ACCOUNT: &str = "ec6yMcJATX6gjNwvqp8rbc4jNEasoUgbfBBGGyV5NvoJ54NXva";
    const TESTNET_KEY: &str = "58760a01edf5ed4f95bfe977d77a27627cd57a25df5dea885972212c2b1c0e2f";
    const LIVENET_ACCOUNT: &str = "bDnC8nCaupb1AQtNjBoLVrGmobdALpBewkyYRG7kk2euMG93Bf";
    const LIVENET_KEY: &str = "9aaf14f906e2be86b32eae1b206335e73646e51f8bf29b6bc580b1d5a0be67b1";

    fn with_checksum(body: &[u8]) -> String {
        base58::encode(bytes::concat(&[body, &checksum(body)]))
    }

    #[test]
    fn test_key_variants() {
        assert_eq!(key_variant(Network::Testnet), 0x13);
        assert_eq!(key_variant(Network::Livenet), 0x11);
    }

    #[test]
    fn test_encode_known_accounts() {
        let testnet = Address::new(&hex::decode(TESTNET_KEY).unwrap(), Network::Testnet).unwrap();
        assert_eq!(testnet.account_number(), TESTNET_ACCOUNT);

        let livenet = Address::new(&hex::decode(LIVENET_KEY).unwrap(), Network::Livenet).unwrap();
        assert_eq!(livenet.to_string(), LIVENET_ACCOUNT);
    }

    #[test]
    fn test_decode_known_account() {
        let address = Address::decode(TESTNET_ACCOUNT, Network::Testnet).unwrap();
        assert_eq!(hex::encode(address.public_key().as_bytes()), TESTNET_KEY);
        assert_eq!(address.network(), Network::Testnet);
        assert_eq!(address.pack()[0], 0x13);
        assert_eq!(address.pack().len(), 33);
    }

    #[test]
    fn test_corrupted_account_is_integrity_failure() {
        let err = Address::decode(
            "ec6yMcJATX6gjNwvqpBNbc4jNEasoUgbfBBGGMM5NvoJ54NXva",
            Network::Testnet,
        )
        .unwrap_err();
        assert_eq!(err, AddressError::ChecksumMismatch);
        assert_eq!(err.kind(), ErrorKind::Integrity);
    }

    #[test]
    fn test_malformed_inputs() {
        for input in [
            "ec6yMcJATX6gjNwvqp8rbc4jNEasoUgbfBBGGyV5NvoJ54N",
            TESTNET_KEY,
            "",
        ] {
            let err = Address::decode(input, Network::Testnet).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Malformed, "input {:?}", input);
        }
    }

    #[test]
    fn test_network_mismatch_is_distinct() {
        let err = Address::decode(LIVENET_ACCOUNT, Network::Testnet).unwrap_err();
        assert_eq!(
            err,
            AddressError::NetworkMismatch {
                expected: Network::Testnet,
                actual: Network::Livenet
            }
        );
        assert_eq!(err.kind(), ErrorKind::NetworkMismatch);
        assert!(Address::is_valid_account_number(LIVENET_ACCOUNT, Network::Livenet));
        assert!(!Address::is_valid_account_number(LIVENET_ACCOUNT, Network::Testnet));
    }

    #[test]
    fn test_private_key_variant_rejected() {
        let mut body = vec![0x12];
        body.extend(hex::decode(TESTNET_KEY).unwrap());
        assert_eq!(
            Address::parse(&with_checksum(&body)),
            Err(AddressError::NotPublicKey)
        );
    }

    #[test]
    fn test_unknown_key_type_rejected() {
        let mut body = vec![0x23];
        body.extend(hex::decode(TESTNET_KEY).unwrap());
        assert_eq!(
            Address::parse(&with_checksum(&body)),
            Err(AddressError::UnknownKeyType(0x23))
        );
    }

    #[test]
    fn test_reserved_variant_bits_rejected() {
        for variant in [0x17u8, 0x1b, 0x1f] {
            let mut body = vec![variant];
            body.extend(hex::decode(TESTNET_KEY).unwrap());
            let err = Address::parse(&with_checksum(&body)).unwrap_err();
            assert_eq!(err, AddressError::ReservedBitsSet(u64::from(variant)));
            assert_eq!(err.kind(), ErrorKind::Malformed);
        }
    }

    #[test]
    fn test_multi_byte_variant_rejected() {
        let mut body = vec![0x93, 0x01];
        body.extend(&hex::decode(TESTNET_KEY).unwrap()[..31]);
        assert_eq!(
            Address::parse(&with_checksum(&body)),
            Err(AddressError::UnknownKeyType(0x93))
        );
    }

    #[test]
    fn test_wrong_key_length_in_factory() {
        let err = Address::new(&[1u8; 31], Network::Testnet).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn test_every_single_byte_flip_is_detected() {
        let raw = base58::decode(TESTNET_ACCOUNT).unwrap();
        for i in 0..raw.len() {
            let mut tampered = raw.clone();
            tampered[i] ^= 0x01;
            let err = Address::parse(&base58::encode(&tampered)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Integrity, "flip at byte {}", i);
        }
    }

    #[test]
    fn test_serializes_as_account_number() {
        let address = Address::decode(TESTNET_ACCOUNT, Network::Testnet).unwrap();
        assert_eq!(
            serde_json::to_string(&address).unwrap(),
            format!("\"{}\"", TESTNET_ACCOUNT)
        );
    }

    proptest! {
        #[test]
        fn prop_round_trip(key in prop::array::uniform32(any::<u8>()), testnet in any::<bool>()) {
            let network = if testnet { Network::Testnet } else { Network::Livenet };
            if let Ok(address) = Address::new(&key, network) {
                prop_assert_eq!(Address::decode(&address.account_number(), network).unwrap(), address);
            }
        }

        #[test]
        fn prop_character_substitution_is_integrity_failure(pos in 0usize..50, replacement in "[1-9A-HJ-NP-Za-km-z]") {
            let mut chars: Vec<char> = TESTNET_ACCOUNT.chars().collect();
            let replacement = replacement.chars().next().unwrap();
            prop_assume!(chars[pos] != replacement);
            chars[pos] = replacement;
            let tampered: String = chars.into_iter().collect();

            // Only a change in decoded length is a format error.
            let same_length = base58::decode(&tampered).unwrap().len() == ENCODED_LENGTH;
            let err = Address::decode(&tampered, Network::Testnet).unwrap_err();
            let expected = if same_length { ErrorKind::Integrity } else { ErrorKind::Malformed };
            prop_assert_eq!(err.kind(), expected, "{:?}", err);
        }
    }
}
