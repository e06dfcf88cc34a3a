//! # Transaction Entities
//!
//! Wire tags, validated hex references and the single-use signature slot
//! shared by every transaction kind.

use crate::domain::errors::ParamsError;
use bm_02_address::Address;
use shared_crypto::{Capability, CryptoError, Ed25519Signature, KeyPair};
use shared_encoding::{hex, Packer};
use shared_types::{ASSET_ID_LENGTH, HASH_LENGTH};
use std::fmt;
use std::hash::{Hash, Hasher};

pub const REGISTRATION_TAG: u64 = 0x02;
pub const ISSUANCE_TAG: u64 = 0x03;
pub const TRANSFER_TAG: u64 = 0x04;
pub const OFFER_TAG: u64 = 0x05;

/// Escrow marker written between link and owner. Always "no payment".
pub(crate) const NO_ESCROW: u8 = 0x00;

/// Id of the transaction being spent: 32 bytes, written as 64 hex chars.
///
/// Keeps the hex exactly as given; equality ignores its case.
#[derive(Debug, Clone)]
pub struct Link {
    hex: String,
    bytes: [u8; HASH_LENGTH],
}

impl Link {
    pub fn parse(link: &str) -> Result<Self, ParamsError> {
        let decoded = hex::decode_exact(link, HASH_LENGTH)
            .map_err(|_| ParamsError::InvalidLink(link.to_string()))?;
        let mut bytes = [0u8; HASH_LENGTH];
        bytes.copy_from_slice(&decoded);
        Ok(Self {
            hex: link.to_string(),
            bytes,
        })
    }

    pub fn as_bytes(&self) -> &[u8; HASH_LENGTH] {
        &self.bytes
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Link {}

impl Hash for Link {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Asset identifier: 64 bytes, written as 128 hex chars. Case is kept as
/// given, like [`Link`].
#[derive(Debug, Clone)]
pub struct AssetId {
    hex: String,
    bytes: Vec<u8>,
}

impl AssetId {
    pub fn parse(asset_id: &str) -> Result<Self, ParamsError> {
        let bytes = hex::decode_exact(asset_id, ASSET_ID_LENGTH)
            .map_err(|_| ParamsError::InvalidAssetId(asset_id.to_string()))?;
        Ok(Self {
            hex: asset_id.to_string(),
            bytes,
        })
    }

    pub(crate) fn from_bytes(bytes: [u8; ASSET_ID_LENGTH]) -> Self {
        Self {
            hex: hex::encode(bytes),
            bytes: bytes.to_vec(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }
}

impl PartialEq for AssetId {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for AssetId {}

impl Hash for AssetId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Holds the signature once set. Setting it twice is a sequencing error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SignatureSlot(Option<Ed25519Signature>);

impl SignatureSlot {
    pub(crate) fn get(&self) -> Option<&Ed25519Signature> {
        self.0.as_ref()
    }

    pub(crate) fn ensure_unsigned(&self) -> Result<(), ParamsError> {
        match self.0 {
            Some(_) => Err(ParamsError::AlreadySigned),
            None => Ok(()),
        }
    }

    /// Sign `payload` and keep the signature.
    pub(crate) fn sign(
        &mut self,
        key_pair: &KeyPair,
        payload: &[u8],
    ) -> Result<Ed25519Signature, ParamsError> {
        self.ensure_unsigned()?;
        let signature = key_pair.sign(payload)?;
        self.0 = Some(signature);
        Ok(signature)
    }

    /// Hex of the signature, or `Unsigned`.
    pub(crate) fn hex(&self) -> Result<String, ParamsError> {
        self.0
            .as_ref()
            .map(|s| hex::encode(s.as_bytes()))
            .ok_or(ParamsError::Unsigned)
    }
}

/// `varint(tag) | lp(link) | 0x00 | lp(owner.pack())`
pub(crate) fn pack_transfer(tag: u64, link: &Link, owner: &Address) -> Vec<u8> {
    Packer::with_tag(tag)
        .field(link.as_bytes())
        .raw(&[NO_ESCROW])
        .field(&owner.pack())
        .finish()
}

/// Fail unless `key_pair` holds the public key of `expected`.
pub(crate) fn ensure_signer(
    key_pair: &KeyPair,
    expected: &Address,
    role: &'static str,
) -> Result<(), ParamsError> {
    if key_pair.capability() != Capability::Signing {
        return Err(CryptoError::UnsupportedCapability {
            operation: "sign",
            capability: key_pair.capability(),
        }
        .into());
    }
    if &key_pair.public_key() != expected.public_key().as_bytes() {
        return Err(ParamsError::SignerMismatch(role));
    }
    Ok(())
}
