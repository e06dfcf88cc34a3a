//! # Transfer Offer
//!
//! First half of a countersigned transfer. The current owner signs an offer
//! to the receiver; the transfer only happens once the receiver countersigns
//! it (see `response`).
//!
//! ```text
//! varint(0x05) | lp(link) | 0x00 | lp(receiver.pack())
//! ```

use crate::domain::entities::{pack_transfer, Link, SignatureSlot, OFFER_TAG};
use crate::domain::errors::ParamsError;
use crate::domain::response::OfferRecord;
use crate::ports::inbound::Signable;
use bm_02_address::Address;
use serde::Serialize;
use shared_crypto::{Ed25519Signature, KeyPair};
use tracing::debug;

#[derive(Serialize)]
struct OfferBody<'a> {
    link: &'a str,
    owner: &'a Address,
    signature: String,
}

#[derive(Serialize)]
struct OfferEnvelope<'a> {
    record: OfferBody<'a>,
}

#[derive(Serialize)]
struct OfferRequest<'a> {
    offer: OfferEnvelope<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOfferParams {
    receiver: Address,
    link: Option<Link>,
    signature: SignatureSlot,
}

impl TransferOfferParams {
    pub fn new(receiver: Address) -> Self {
        Self {
            receiver,
            link: None,
            signature: SignatureSlot::default(),
        }
    }

    pub fn with_link(receiver: Address, link: &str) -> Result<Self, ParamsError> {
        let mut params = Self::new(receiver);
        params.set_link(link)?;
        Ok(params)
    }

    pub fn set_link(&mut self, link: &str) -> Result<(), ParamsError> {
        self.signature.ensure_unsigned()?;
        self.link = Some(Link::parse(link)?);
        Ok(())
    }

    pub fn receiver(&self) -> &Address {
        &self.receiver
    }

    pub fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    /// The record a receiver answers, once the ledger has assigned `id`.
    pub fn to_record(&self, id: &str) -> Result<OfferRecord, ParamsError> {
        let signature = *self.signature.get().ok_or(ParamsError::Unsigned)?;
        OfferRecord::new(id, self.require_link()?.clone(), self.receiver, signature)
    }

    fn require_link(&self) -> Result<&Link, ParamsError> {
        self.link.as_ref().ok_or(ParamsError::MissingField("link"))
    }
}

impl Signable for TransferOfferParams {
    fn pack(&self) -> Result<Vec<u8>, ParamsError> {
        Ok(pack_transfer(OFFER_TAG, self.require_link()?, &self.receiver))
    }

    fn sign(&mut self, key_pair: &KeyPair) -> Result<Ed25519Signature, ParamsError> {
        let payload = self.pack()?;
        let signature = self.signature.sign(key_pair, &payload)?;
        debug!(len = payload.len(), "signed transfer offer");
        Ok(signature)
    }

    fn to_json(&self) -> Result<String, ParamsError> {
        let request = OfferRequest {
            offer: OfferEnvelope {
                record: OfferBody {
                    link: self.require_link()?.as_str(),
                    owner: &self.receiver,
                    signature: self.signature.hex()?,
                },
            },
        };
        Ok(serde_json::to_string(&request)?)
    }

    fn signature(&self) -> Option<&Ed25519Signature> {
        self.signature.get()
    }
}
