//! # Asset Registration
//!
//! Registers an asset: a name, free-form metadata and a fingerprint of the
//! content. The asset id is derived from the fingerprint alone, so the same
//! content always registers as the same asset.
//!
//! ```text
//! varint(0x02) | lp(name) | lp(fingerprint) | lp(metadata) | lp(registrant.pack())
//! ```
//!
//! Metadata is rendered as `key\0value\0key\0value` with keys in sorted order.

use crate::domain::entities::{ensure_signer, AssetId, SignatureSlot, REGISTRATION_TAG};
use crate::domain::errors::ParamsError;
use crate::ports::inbound::Signable;
use bm_02_address::Address;
use serde::Serialize;
use shared_crypto::{sha3_512, Ed25519Signature, KeyPair};
use shared_encoding::{hex, Packer};
use std::collections::BTreeMap;
use tracing::debug;

pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_METADATA_LENGTH: usize = 2048;
pub const MAX_FINGERPRINT_LENGTH: usize = 1024;

const FINGERPRINT_PREFIX: &str = "01";
const METADATA_SEPARATOR: char = '\u{0000}';

/// `"01" | hex(SHA3-512(content))`
pub fn compute_fingerprint(content: &[u8]) -> String {
    format!("{}{}", FINGERPRINT_PREFIX, hex::encode(sha3_512(content)))
}

#[derive(Serialize)]
struct AssetBody<'a> {
    name: &'a str,
    fingerprint: &'a str,
    metadata: String,
    registrant: &'a Address,
    signature: String,
}

#[derive(Serialize)]
struct RegistrationRequest<'a> {
    assets: Vec<AssetBody<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationParams {
    name: String,
    metadata: BTreeMap<String, String>,
    fingerprint: Option<String>,
    registrant: Address,
    signature: SignatureSlot,
}

impl RegistrationParams {
    pub fn new(
        name: &str,
        metadata: BTreeMap<String, String>,
        registrant: Address,
    ) -> Result<Self, ParamsError> {
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ParamsError::InvalidName(format!(
                "longer than {} characters",
                MAX_NAME_LENGTH
            )));
        }
        let params = Self {
            name: name.to_string(),
            metadata,
            fingerprint: None,
            registrant,
            signature: SignatureSlot::default(),
        };
        params.validate_metadata()?;
        Ok(params)
    }

    pub fn set_fingerprint(&mut self, fingerprint: &str) -> Result<(), ParamsError> {
        self.signature.ensure_unsigned()?;
        if fingerprint.is_empty() || fingerprint.len() > MAX_FINGERPRINT_LENGTH {
            return Err(ParamsError::InvalidFingerprint(format!(
                "length must be 1..={}",
                MAX_FINGERPRINT_LENGTH
            )));
        }
        self.fingerprint = Some(fingerprint.to_string());
        Ok(())
    }

    pub fn set_fingerprint_from_content(&mut self, content: &[u8]) -> Result<(), ParamsError> {
        self.set_fingerprint(&compute_fingerprint(content))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    pub fn registrant(&self) -> &Address {
        &self.registrant
    }

    /// Canonical metadata string.
    pub fn metadata_string(&self) -> String {
        let separator = METADATA_SEPARATOR.to_string();
        self.metadata
            .iter()
            .flat_map(|(k, v)| [k.as_str(), v.as_str()])
            .collect::<Vec<_>>()
            .join(&separator)
    }

    /// `hex(SHA3-512(fingerprint))`
    pub fn asset_id(&self) -> Result<AssetId, ParamsError> {
        let fingerprint = self.require_fingerprint()?;
        Ok(AssetId::from_bytes(sha3_512(fingerprint.as_bytes())))
    }

    fn require_fingerprint(&self) -> Result<&str, ParamsError> {
        self.fingerprint
            .as_deref()
            .ok_or(ParamsError::MissingField("fingerprint"))
    }

    fn validate_metadata(&self) -> Result<(), ParamsError> {
        for (key, value) in &self.metadata {
            if key.is_empty() {
                return Err(ParamsError::InvalidMetadata("empty key".to_string()));
            }
            if key.contains(METADATA_SEPARATOR) || value.contains(METADATA_SEPARATOR) {
                return Err(ParamsError::InvalidMetadata(format!(
                    "entry {:?} contains a NUL character",
                    key
                )));
            }
        }
        let rendered = self.metadata_string().len();
        if rendered > MAX_METADATA_LENGTH {
            return Err(ParamsError::InvalidMetadata(format!(
                "{} bytes exceeds {}",
                rendered, MAX_METADATA_LENGTH
            )));
        }
        Ok(())
    }
}

impl Signable for RegistrationParams {
    fn pack(&self) -> Result<Vec<u8>, ParamsError> {
        Ok(Packer::with_tag(REGISTRATION_TAG)
            .string(&self.name)
            .string(self.require_fingerprint()?)
            .string(&self.metadata_string())
            .field(&self.registrant.pack())
            .finish())
    }

    fn sign(&mut self, key_pair: &KeyPair) -> Result<Ed25519Signature, ParamsError> {
        ensure_signer(key_pair, &self.registrant, "registrant")?;
        let payload = self.pack()?;
        let signature = self.signature.sign(key_pair, &payload)?;
        debug!(name = %self.name, "signed asset registration");
        Ok(signature)
    }

    fn to_json(&self) -> Result<String, ParamsError> {
        let request = RegistrationRequest {
            assets: vec![AssetBody {
                name: &self.name,
                fingerprint: self.require_fingerprint()?,
                metadata: self.metadata_string(),
                registrant: &self.registrant,
                signature: self.signature.hex()?,
            }],
        };
        Ok(serde_json::to_string(&request)?)
    }

    fn signature(&self) -> Option<&Ed25519Signature> {
        self.signature.get()
    }
}
