//! # Integration Test Flows
//!
//! A bitmark's life across all four subsystems:
//!
//! 1. **Account (03)**: fresh account from a version 2 seed (01)
//! 2. **Registration (04)**: asset registered by the account
//! 3. **Issuance (04)**: bitmarks issued to the registrant (02 packs the owner)
//! 4. **Offer / Response (04)**: countersigned transfer to a second account
//!
//! Every signature produced along the way is re-verified from the account
//! number alone, the way the ledger would.

#[cfg(test)]
mod tests {
    use bm_01_seed::Locale;
    use bm_03_account::{Account, AccountApi};
    use bm_04_transactions::{
        issues_to_json, IssuanceParams, Params, RegistrationParams, Signable,
        TransferOfferParams, TransferResponseParams,
    };
    use sdk_telemetry::{init_logging, log_event, TelemetryConfig, TelemetryError};
    use shared_types::{ErrorKind, SdkConfig};
    use std::collections::BTreeMap;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const PREVIOUS_TX: &str = "ce49d8b5095e531bd02ee4005349c845cdaf9800862cbbf40d6bea57a5319b7e";

    fn config() -> SdkConfig {
        SdkConfig::default()
    }

    fn verify(account: &Account, params: &impl Signable) -> bool {
        let signature = params.signature().unwrap();
        Account::verify(
            &account.account_number(),
            signature.as_bytes(),
            &params.pack().unwrap(),
            account.network(),
        )
        .unwrap()
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_register_issue_and_countersigned_transfer() {
        let network = config().network;
        let alice = Account::new(network).unwrap();
        let bob = Account::new(network).unwrap();

        // Registration
        let metadata = BTreeMap::from([("source".to_string(), "integration".to_string())]);
        let mut asset = RegistrationParams::new("flow asset", metadata, *alice.address()).unwrap();
        asset.set_fingerprint_from_content(b"flow asset content").unwrap();
        asset.sign(alice.auth_key_pair()).unwrap();
        assert!(verify(&alice, &asset));
        let asset_id = asset.asset_id().unwrap();

        // Issuance
        let mut issues = IssuanceParams::batch(asset_id.as_str(), *alice.address(), 2).unwrap();
        for issue in issues.iter_mut() {
            issue.sign(alice.auth_key_pair()).unwrap();
            assert!(verify(&alice, &*issue));
        }
        let body: serde_json::Value = serde_json::from_str(&issues_to_json(&issues).unwrap()).unwrap();
        assert_eq!(body["issues"][0]["owner"], alice.account_number());

        // Offer from alice to bob
        let mut offer = TransferOfferParams::with_link(*bob.address(), PREVIOUS_TX).unwrap();
        offer.sign(alice.auth_key_pair()).unwrap();
        assert!(verify(&alice, &offer));

        // Bob accepts
        let record = offer.to_record("offer-42").unwrap();
        let mut accept = TransferResponseParams::accept(record);
        accept.sign(bob.auth_key_pair()).unwrap();
        assert!(verify(&bob, &accept));
        assert!(!verify(&alice, &accept));

        let json: serde_json::Value = serde_json::from_str(&accept.to_json().unwrap()).unwrap();
        assert_eq!(json["response"]["reply"], "accept");
        assert!(json["response"]["countersignature"].is_string());
    }

    #[test]
    fn test_params_enum_drives_every_kind() {
        let network = config().network;
        let alice = Account::new(network).unwrap();
        let bob = Account::new(network).unwrap();

        let mut asset = RegistrationParams::new("enum asset", BTreeMap::new(), *alice.address()).unwrap();
        asset.set_fingerprint_from_content(b"enum").unwrap();
        let asset_id = asset.asset_id().unwrap();

        let mut all: Vec<Params> = vec![
            asset.into(),
            IssuanceParams::new(asset_id.as_str(), *alice.address()).unwrap().into(),
            bm_04_transactions::TransferParams::with_link(*bob.address(), PREVIOUS_TX)
                .unwrap()
                .into(),
            TransferOfferParams::with_link(*bob.address(), PREVIOUS_TX).unwrap().into(),
        ];

        for params in all.iter_mut() {
            assert_eq!(params.to_json().unwrap_err().kind(), ErrorKind::Sequencing);
            params.sign(alice.auth_key_pair()).unwrap();
            let json: serde_json::Value = serde_json::from_str(&params.to_json().unwrap()).unwrap();
            assert!(json.get(params.kind()).is_some(), "kind {}", params.kind());
        }
    }

    #[test]
    fn test_account_restores_from_its_own_phrase() {
        let network = config().network;
        let account = Account::new(network).unwrap();

        let phrase = account.recovery_phrase(Locale::English);
        let restored = Account::from_recovery_phrase(phrase.words(), network).unwrap();
        assert_eq!(restored.account_number(), account.account_number());
        assert_eq!(restored.encoded_seed(), account.encoded_seed());
        assert_eq!(
            restored.enc_key_pair().public_key(),
            account.enc_key_pair().public_key()
        );
    }

    #[test]
    fn test_logging_installs_once() {
        let telemetry = TelemetryConfig::for_sdk(&config().with_log_level("debug"));
        let first = init_logging(&telemetry);
        assert!(matches!(first, Ok(_) | Err(TelemetryError::SubscriberInit(_))));

        log_event!(info, "flows", "logging installed", filter = "debug");

        let second = init_logging(&telemetry);
        assert!(matches!(second, Err(TelemetryError::SubscriberInit(_))));
    }
}
