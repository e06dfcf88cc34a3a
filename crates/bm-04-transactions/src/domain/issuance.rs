//! # Issuance
//!
//! Creates a new bitmark of a registered asset, owned by the issuer. Each
//! issue carries a nonce so repeated issues of one asset get distinct ids.
//!
//! ```text
//! varint(0x03) | lp(assetId) | lp(owner.pack()) | varint(nonce)
//! ```
//!
//! Issuing several bitmarks at once means one signed `IssuanceParams` per
//! bitmark, submitted together through [`issues_to_json`].

use crate::domain::entities::{ensure_signer, AssetId, SignatureSlot, ISSUANCE_TAG};
use crate::domain::errors::ParamsError;
use crate::ports::inbound::Signable;
use bm_02_address::Address;
use serde::Serialize;
use shared_crypto::{Ed25519Signature, KeyPair};
use shared_encoding::Packer;
use tracing::debug;

#[derive(Serialize)]
struct IssueBody<'a> {
    asset_id: &'a str,
    owner: &'a Address,
    nonce: u64,
    signature: String,
}

#[derive(Serialize)]
struct IssuanceRequest<'a> {
    issues: Vec<IssueBody<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuanceParams {
    asset_id: AssetId,
    owner: Address,
    nonce: u64,
    signature: SignatureSlot,
}

impl IssuanceParams {
    /// Single issue with a random nonce.
    pub fn new(asset_id: &str, owner: Address) -> Result<Self, ParamsError> {
        Self::with_nonce(asset_id, owner, rand::random())
    }

    pub fn with_nonce(asset_id: &str, owner: Address, nonce: u64) -> Result<Self, ParamsError> {
        Ok(Self {
            asset_id: AssetId::parse(asset_id)?,
            owner,
            nonce,
            signature: SignatureSlot::default(),
        })
    }

    /// `quantity` issues of one asset, each with its own random nonce.
    pub fn batch(asset_id: &str, owner: Address, quantity: usize) -> Result<Vec<Self>, ParamsError> {
        if quantity == 0 {
            return Err(ParamsError::InvalidQuantity);
        }
        let asset_id = AssetId::parse(asset_id)?;
        let mut issues: Vec<Self> = Vec::with_capacity(quantity);
        while issues.len() < quantity {
            let nonce = rand::random();
            if issues.iter().any(|i| i.nonce == nonce) {
                continue;
            }
            issues.push(Self {
                asset_id: asset_id.clone(),
                owner,
                nonce,
                signature: SignatureSlot::default(),
            });
        }
        Ok(issues)
    }

    pub fn asset_id(&self) -> &AssetId {
        &self.asset_id
    }

    pub fn owner(&self) -> &Address {
        &self.owner
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    fn body(&self) -> Result<IssueBody<'_>, ParamsError> {
        Ok(IssueBody {
            asset_id: self.asset_id.as_str(),
            owner: &self.owner,
            nonce: self.nonce,
            signature: self.signature.hex()?,
        })
    }
}

impl Signable for IssuanceParams {
    fn pack(&self) -> Result<Vec<u8>, ParamsError> {
        Ok(Packer::with_tag(ISSUANCE_TAG)
            .field(self.asset_id.as_bytes())
            .field(&self.owner.pack())
            .varint(self.nonce)
            .finish())
    }

    fn sign(&mut self, key_pair: &KeyPair) -> Result<Ed25519Signature, ParamsError> {
        ensure_signer(key_pair, &self.owner, "owner")?;
        let payload = self.pack()?;
        let signature = self.signature.sign(key_pair, &payload)?;
        debug!(nonce = self.nonce, "signed issue");
        Ok(signature)
    }

    fn to_json(&self) -> Result<String, ParamsError> {
        issues_to_json(std::slice::from_ref(self))
    }

    fn signature(&self) -> Option<&Ed25519Signature> {
        self.signature.get()
    }
}

/// `{"issues":[...]}` for a set of signed issues.
pub fn issues_to_json(issues: &[IssuanceParams]) -> Result<String, ParamsError> {
    if issues.is_empty() {
        return Err(ParamsError::InvalidQuantity);
    }
    let request = IssuanceRequest {
        issues: issues
            .iter()
            .map(IssuanceParams::body)
            .collect::<Result<_, _>>()?,
    };
    Ok(serde_json::to_string(&request)?)
}
