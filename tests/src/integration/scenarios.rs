//! # Published Vectors
//!
//! Fixed inputs with known outputs, checked through the public API of each
//! crate the way a client would use it.

#[cfg(test)]
mod tests {
    use bm_01_seed::{Locale, RecoveryPhrase};
    use bm_02_address::Address;
    use bm_03_account::{Account, AccountApi};
    use bm_04_transactions::{ParamsError, Signable, TransferOfferParams, TransferParams};
    use shared_types::{ErrorKind, Network, SdkConfig};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const PHRASE: &str = "accident syrup inquiry you clutch liquid fame upset joke glow best school repeat birth library combine access camera organ trial crazy jeans lizard science";
    const SEED_HEX: &str = "7b95d37f92c904949f79784c7855606b6a2d60416f01441671f4132cef60b607";
    const ACCOUNT_NUMBER: &str = "ec6yMcJATX6gjNwvqp8rbc4jNEasoUgbfBBGGyV5NvoJ54NXva";
    const PUBLIC_KEY: &str = "58760a01edf5ed4f95bfe977d77a27627cd57a25df5dea885972212c2b1c0e2f";
    const CORRUPTED_ACCOUNT_NUMBER: &str = "ec6yMcJATX6gjNwvqpBNbc4jNEasoUgbfBBGGMM5NvoJ54NXva";

    const RECEIVER: &str = "eujeF5ZBDV3qJyKeHxNqnmJsrc9iN7eHJGECsRuSXvLmnNjsWX";
    const LINK: &str = "bfdc91b7abc9960048649857974e2ff42a76ed35c98415f52c976fb66ba92115";
    const TRANSFER_SIGNATURE: &str = "ae38e14b9e139d69dcee625446ea57b305d1c787617969083294696180d71cfaed9ded4986730ad328689d6c744b8b4c0b79750e646355954101f565c0250703";
    const OFFER_SIGNATURE: &str = "36bfb3b55ac370b4ad1e9cce74e0120fa09deeb22b7d6bef8c485465186b5f818832c682786ee3759097ec7bdde8739596921cc0ef73c5efbb698dec70427b09";

    fn network() -> Network {
        SdkConfig::default().network
    }

    fn account() -> Account {
        let words: Vec<&str> = PHRASE.split(' ').collect();
        Account::from_recovery_phrase(&words, network()).unwrap()
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[test]
    fn test_phrase_to_seed_account_and_key() {
        let account = account();

        assert_eq!(hex::encode(account.seed().core()), SEED_HEX);
        assert_eq!(account.account_number(), ACCOUNT_NUMBER);
        assert_eq!(hex::encode(account.auth_key_pair().public_key()), PUBLIC_KEY);
        assert_eq!(account.network(), Network::Testnet);
    }

    #[test]
    fn test_corrupted_account_number_is_integrity_failure() {
        let err = Address::decode(CORRUPTED_ACCOUNT_NUMBER, network()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Integrity);

        let err = Account::parse_account_number(CORRUPTED_ACCOUNT_NUMBER, network()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Integrity);
    }

    #[test]
    fn test_signed_transfer_json() {
        let receiver = Account::parse_account_number(RECEIVER, network()).unwrap();
        let mut params = TransferParams::with_link(receiver, LINK).unwrap();
        params.sign(account().auth_key_pair()).unwrap();

        assert_eq!(
            params.to_json().unwrap(),
            format!(
                r#"{{"transfer":{{"link":"{}","owner":"{}","signature":"{}"}}}}"#,
                LINK, RECEIVER, TRANSFER_SIGNATURE
            )
        );
    }

    #[test]
    fn test_unsigned_to_json_is_sequencing_violation() {
        let receiver = Account::parse_account_number(RECEIVER, network()).unwrap();
        let params = TransferParams::with_link(receiver, LINK).unwrap();

        let err = params.to_json().unwrap_err();
        assert_eq!(err, ParamsError::Unsigned);
        assert_eq!(err.kind(), ErrorKind::Sequencing);
    }

    #[test]
    fn test_offer_signature_vector() {
        let receiver = Account::parse_account_number(RECEIVER, network()).unwrap();
        let mut params = TransferOfferParams::with_link(receiver, LINK).unwrap();
        let signature = params.sign(account().auth_key_pair()).unwrap();
        assert_eq!(hex::encode(signature.as_bytes()), OFFER_SIGNATURE);
    }

    #[test]
    fn test_phrase_survives_locale_change() {
        let account = account();
        let chinese = account.recovery_phrase(Locale::TraditionalChinese);
        assert_eq!(chinese.len(), 24);

        let restored = Account::from_recovery_phrase(chinese.words(), network()).unwrap();
        assert_eq!(restored.account_number(), ACCOUNT_NUMBER);

        let english = RecoveryPhrase::parse(PHRASE).unwrap();
        assert_eq!(account.recovery_phrase(Locale::English), english);
    }

    #[test]
    fn test_phrase_on_wrong_network() {
        let words: Vec<&str> = PHRASE.split(' ').collect();
        let err = Account::from_recovery_phrase(&words, Network::Livenet).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NetworkMismatch);
    }
}
