//! # Params
//!
//! Closed set of transaction kinds, dispatched by variant.

use crate::domain::errors::ParamsError;
use crate::domain::issuance::IssuanceParams;
use crate::domain::offer::TransferOfferParams;
use crate::domain::registration::RegistrationParams;
use crate::domain::response::TransferResponseParams;
use crate::domain::transfer::TransferParams;
use crate::ports::inbound::Signable;
use shared_crypto::{Ed25519Signature, KeyPair};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Params {
    Registration(RegistrationParams),
    Issuance(IssuanceParams),
    Transfer(TransferParams),
    Offer(TransferOfferParams),
    Response(TransferResponseParams),
}

impl Params {
    /// Name of the kind, as used for the top-level JSON key.
    pub fn kind(&self) -> &'static str {
        match self {
            Params::Registration(_) => "assets",
            Params::Issuance(_) => "issues",
            Params::Transfer(_) => "transfer",
            Params::Offer(_) => "offer",
            Params::Response(_) => "response",
        }
    }

    fn inner(&self) -> &dyn Signable {
        match self {
            Params::Registration(p) => p,
            Params::Issuance(p) => p,
            Params::Transfer(p) => p,
            Params::Offer(p) => p,
            Params::Response(p) => p,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Signable {
        match self {
            Params::Registration(p) => p,
            Params::Issuance(p) => p,
            Params::Transfer(p) => p,
            Params::Offer(p) => p,
            Params::Response(p) => p,
        }
    }
}

impl Signable for Params {
    fn pack(&self) -> Result<Vec<u8>, ParamsError> {
        self.inner().pack()
    }

    fn sign(&mut self, key_pair: &KeyPair) -> Result<Ed25519Signature, ParamsError> {
        self.inner_mut().sign(key_pair)
    }

    fn to_json(&self) -> Result<String, ParamsError> {
        self.inner().to_json()
    }

    fn signature(&self) -> Option<&Ed25519Signature> {
        self.inner().signature()
    }
}

impl From<RegistrationParams> for Params {
    fn from(p: RegistrationParams) -> Self {
        Params::Registration(p)
    }
}

impl From<IssuanceParams> for Params {
    fn from(p: IssuanceParams) -> Self {
        Params::Issuance(p)
    }
}

impl From<TransferParams> for Params {
    fn from(p: TransferParams) -> Self {
        Params::Transfer(p)
    }
}

impl From<TransferOfferParams> for Params {
    fn from(p: TransferOfferParams) -> Self {
        Params::Offer(p)
    }
}

impl From<TransferResponseParams> for Params {
    fn from(p: TransferResponseParams) -> Self {
        Params::Response(p)
    }
}
