//! # Transfer Response
//!
//! The answer to a pending transfer offer.
//!
//! | Reply | Signed bytes | JSON signature field |
//! |-------|--------------|----------------------|
//! | accept | `offer pack \| lp(offer signature)` | `countersignature` |
//! | reject | `"updateOffer\|<id>\|reject"` | `signature` |
//! | cancel | `"updateOffer\|<id>\|cancel"` | `signature` |
//!
//! Accepting is the receiver's countersignature over the full transfer, so
//! the ledger can verify both halves. Reject and cancel only authenticate a
//! status change of the offer.

use crate::domain::entities::{pack_transfer, Link, SignatureSlot, OFFER_TAG};
use crate::domain::errors::ParamsError;
use crate::ports::inbound::Signable;
use bm_02_address::Address;
use serde::Serialize;
use shared_crypto::{Ed25519Signature, KeyPair};
use shared_encoding::{hex, packing};
use std::fmt;
use tracing::debug;

/// How the receiver (or the sender, for `Cancel`) answers an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reply {
    Accept,
    Reject,
    Cancel,
}

impl Reply {
    pub fn as_str(self) -> &'static str {
        match self {
            Reply::Accept => "accept",
            Reply::Reject => "reject",
            Reply::Cancel => "cancel",
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A signed offer as the ledger reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferRecord {
    id: String,
    link: Link,
    owner: Address,
    signature: Ed25519Signature,
}

impl OfferRecord {
    pub fn new(
        id: &str,
        link: Link,
        owner: Address,
        signature: Ed25519Signature,
    ) -> Result<Self, ParamsError> {
        if id.trim().is_empty() {
            return Err(ParamsError::EmptyOfferId);
        }
        Ok(Self {
            id: id.to_string(),
            link,
            owner,
            signature,
        })
    }

    /// Build from the string fields of a ledger response.
    pub fn from_parts(
        id: &str,
        link: &str,
        owner: Address,
        signature: &str,
    ) -> Result<Self, ParamsError> {
        let bytes = hex::decode(signature)
            .map_err(|_| ParamsError::InvalidSignature(signature.to_string()))?;
        let signature = Ed25519Signature::from_slice(&bytes)?;
        Self::new(id, Link::parse(link)?, owner, signature)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    pub fn owner(&self) -> &Address {
        &self.owner
    }

    pub fn signature(&self) -> &Ed25519Signature {
        &self.signature
    }

    /// The offer payload the sender signed.
    pub fn pack(&self) -> Vec<u8> {
        pack_transfer(OFFER_TAG, &self.link, &self.owner)
    }
}

#[derive(Serialize)]
struct ResponseBody<'a> {
    id: &'a str,
    reply: Reply,
    #[serde(skip_serializing_if = "Option::is_none")]
    countersignature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    signature: Option<String>,
}

#[derive(Serialize)]
struct ResponseRequest<'a> {
    response: ResponseBody<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferResponseParams {
    record: OfferRecord,
    reply: Reply,
    signature: SignatureSlot,
}

impl TransferResponseParams {
    pub fn new(record: OfferRecord, reply: Reply) -> Self {
        Self {
            record,
            reply,
            signature: SignatureSlot::default(),
        }
    }

    pub fn accept(record: OfferRecord) -> Self {
        Self::new(record, Reply::Accept)
    }

    pub fn reject(record: OfferRecord) -> Self {
        Self::new(record, Reply::Reject)
    }

    pub fn cancel(record: OfferRecord) -> Self {
        Self::new(record, Reply::Cancel)
    }

    pub fn record(&self) -> &OfferRecord {
        &self.record
    }

    pub fn reply(&self) -> Reply {
        self.reply
    }
}

impl Signable for TransferResponseParams {
    fn pack(&self) -> Result<Vec<u8>, ParamsError> {
        let payload = match self.reply {
            Reply::Accept => {
                packing::append_field(&self.record.pack(), self.record.signature.as_bytes())
            }
            Reply::Reject | Reply::Cancel => {
                format!("updateOffer|{}|{}", self.record.id, self.reply).into_bytes()
            }
        };
        Ok(payload)
    }

    fn sign(&mut self, key_pair: &KeyPair) -> Result<Ed25519Signature, ParamsError> {
        let payload = self.pack()?;
        let signature = self.signature.sign(key_pair, &payload)?;
        debug!(reply = %self.reply, "signed transfer response");
        Ok(signature)
    }

    fn to_json(&self) -> Result<String, ParamsError> {
        let signature = self.signature.hex()?;
        let (countersignature, signature) = match self.reply {
            Reply::Accept => (Some(signature), None),
            Reply::Reject | Reply::Cancel => (None, Some(signature)),
        };
        let request = ResponseRequest {
            response: ResponseBody {
                id: &self.record.id,
                reply: self.reply,
                countersignature,
                signature,
            },
        };
        Ok(serde_json::to_string(&request)?)
    }

    fn signature(&self) -> Option<&Ed25519Signature> {
        self.signature.get()
    }
}
