//! # Transfer
//!
//! Direct transfer of a bitmark to a new owner, signed by the current owner.
//!
//! ```text
//! varint(0x04) | lp(link) | 0x00 | lp(receiver.pack())
//! ```

use crate::domain::entities::{pack_transfer, Link, SignatureSlot, TRANSFER_TAG};
use crate::domain::errors::ParamsError;
use crate::ports::inbound::Signable;
use bm_02_address::Address;
use serde::Serialize;
use shared_crypto::{Ed25519Signature, KeyPair};
use tracing::debug;

#[derive(Serialize)]
struct TransferBody<'a> {
    link: &'a str,
    owner: &'a Address,
    signature: String,
}

#[derive(Serialize)]
struct TransferRequest<'a> {
    transfer: TransferBody<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferParams {
    receiver: Address,
    link: Option<Link>,
    signature: SignatureSlot,
}

impl TransferParams {
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

    /// Set the previous transaction id. Not allowed once signed.
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

    fn require_link(&self) -> Result<&Link, ParamsError> {
        self.link.as_ref().ok_or(ParamsError::MissingField("link"))
    }
}

impl Signable for TransferParams {
    fn pack(&self) -> Result<Vec<u8>, ParamsError> {
        Ok(pack_transfer(TRANSFER_TAG, self.require_link()?, &self.receiver))
    }

    fn sign(&mut self, key_pair: &KeyPair) -> Result<Ed25519Signature, ParamsError> {
        let payload = self.pack()?;
        let signature = self.signature.sign(key_pair, &payload)?;
        debug!(len = payload.len(), "signed transfer");
        Ok(signature)
    }

    fn to_json(&self) -> Result<String, ParamsError> {
        let request = TransferRequest {
            transfer: TransferBody {
                link: self.require_link()?.as_str(),
                owner: &self.receiver,
                signature: self.signature.hex()?,
            },
        };
        Ok(serde_json::to_string(&request)?)
    }

    fn signature(&self) -> Option<&Ed25519Signature> {
        self.signature.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shared_crypto::Ed25519KeyPair;
    use shared_types::{ErrorKind, Network};

    const SIGNER_SEED: &str = "0246a917d422e596168185cea9943459c09751532c52fe4ddc27b06e2893ef22";
    const RECEIVER: &str = "eujeF5ZBDV3qJyKeHxNqnmJsrc9iN7eHJGECsRuSXvLmnNjsWX";

    fn signer() -> KeyPair {
        let seed: [u8; 32] = hex::decode(SIGNER_SEED).unwrap().try_into().unwrap();
        KeyPair::from(Ed25519KeyPair::from_seed(&seed))
    }

    fn receiver() -> Address {
        Address::decode(RECEIVER, Network::Testnet).unwrap()
    }

    #[test]
    fn test_known_signatures() {
        for (link, expected) in [
            (
                "bfdc91b7abc9960048649857974e2ff42a76ed35c98415f52c976fb66ba92115",
                "ae38e14b9e139d69dcee625446ea57b305d1c787617969083294696180d71cfaed9ded4986730ad328689d6c744b8b4c0b79750e646355954101f565c0250703",
            ),
            (
                "ce49d8b5095e531bd02ee4005349c845cdaf9800862cbbf40d6bea57a5319b7e",
                "8d571ae163ed78b1610e33a57368f889485866ecbc0f597ddeebac6b7db50ffc1b859a4fb7ec3e3e0ed2f67ad9739ed7dcff214292793140bf3724e411402d06",
            ),
        ] {
            let mut params = TransferParams::with_link(receiver(), link).unwrap();
            let signature = params.sign(&signer()).unwrap();
            assert_eq!(hex::encode(signature.as_bytes()), expected);
        }
    }

    #[test]
    fn test_pack_layout() {
        let link = "bfdc91b7abc9960048649857974e2ff42a76ed35c98415f52c976fb66ba92115";
        let params = TransferParams::with_link(receiver(), link).unwrap();
        let packed = params.pack().unwrap();

        assert_eq!(packed[0], 0x04);
        assert_eq!(packed[1], 32);
        assert_eq!(hex::encode(&packed[2..34]), link);
        assert_eq!(packed[34], 0x00);
        assert_eq!(packed[35], 33);
        assert_eq!(packed[36..], receiver().pack()[..]);
    }

    #[test]
    fn test_json_shape() {
        let link = "ce49d8b5095e531bd02ee4005349c845cdaf9800862cbbf40d6bea57a5319b7e";
        let mut params = TransferParams::with_link(receiver(), link).unwrap();
        let signature = params.sign(&signer()).unwrap();

        assert_eq!(
            params.to_json().unwrap(),
            format!(
                r#"{{"transfer":{{"link":"{}","owner":"{}","signature":"{}"}}}}"#,
                link,
                RECEIVER,
                hex::encode(signature.as_bytes())
            )
        );
    }

    #[test]
    fn test_link_echoed_as_given() {
        let lower = "ce49d8b5095e531bd02ee4005349c845cdaf9800862cbbf40d6bea57a5319b7e";
        let upper = lower.to_uppercase();
        let mut shouted = TransferParams::with_link(receiver(), &upper).unwrap();
        let mut quiet = TransferParams::with_link(receiver(), lower).unwrap();
        assert_eq!(shouted.pack().unwrap(), quiet.pack().unwrap());

        shouted.sign(&signer()).unwrap();
        quiet.sign(&signer()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&shouted.to_json().unwrap()).unwrap();
        assert_eq!(json["transfer"]["link"], upper);
        let json: serde_json::Value = serde_json::from_str(&quiet.to_json().unwrap()).unwrap();
        assert_eq!(json["transfer"]["link"], lower);
    }

    #[test]
    fn test_missing_link_is_sequencing() {
        let mut params = TransferParams::new(receiver());
        assert_eq!(params.pack(), Err(ParamsError::MissingField("link")));
        assert_eq!(params.sign(&signer()).unwrap_err().kind(), ErrorKind::Sequencing);
        assert!(!params.is_signed());
    }

    #[test]
    fn test_to_json_before_sign() {
        let params = TransferParams::with_link(
            receiver(),
            "bfdc91b7abc9960048649857974e2ff42a76ed35c98415f52c976fb66ba92115",
        )
        .unwrap();
        let err = params.to_json().unwrap_err();
        assert_eq!(err, ParamsError::Unsigned);
        assert_eq!(err.kind(), ErrorKind::Sequencing);
    }

    #[test]
    fn test_signed_params_are_frozen() {
        let link = "bfdc91b7abc9960048649857974e2ff42a76ed35c98415f52c976fb66ba92115";
        let mut params = TransferParams::with_link(receiver(), link).unwrap();
        params.sign(&signer()).unwrap();

        assert_eq!(params.sign(&signer()), Err(ParamsError::AlreadySigned));
        assert_eq!(params.set_link(link), Err(ParamsError::AlreadySigned));
    }

    #[test]
    fn test_invalid_link_rejected_eagerly() {
        let err = TransferParams::with_link(receiver(), "1234").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    proptest! {
        #[test]
        fn prop_pack_deterministic_and_link_sensitive(a in prop::array::uniform32(any::<u8>()), b in prop::array::uniform32(any::<u8>())) {
            let first = TransferParams::with_link(receiver(), &hex::encode(a)).unwrap();
            let again = TransferParams::with_link(receiver(), &hex::encode(a)).unwrap();
            prop_assert_eq!(first.pack().unwrap(), again.pack().unwrap());

            let other = TransferParams::with_link(receiver(), &hex::encode(b)).unwrap();
            prop_assert_eq!(first.pack().unwrap() == other.pack().unwrap(), a == b);
        }
    }
}
