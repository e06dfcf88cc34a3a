//! # Transaction Subsystem (BM-04)
//!
//! Builds the byte-exact payloads a ledger node verifies signatures against,
//! and renders signed parameters into the JSON the node accepts.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): one module per transaction kind, plus the
//!   closed [`Params`] enum over all of them
//! - **Ports Layer** (`ports/`): the [`Signable`] trait every kind implements
//!
//! ## Lifecycle
//!
//! ```text
//! new(required fields) -> [set_link] -> pack -> sign -> to_json
//! ```
//!
//! Required fields are validated when set. `sign` freezes the parameter; a
//! second `sign` and any `to_json` before signing fail with a sequencing
//! error.
//!
//! ## Wire Tags
//!
//! | Kind | Tag |
//! |------|-----|
//! | Registration | `0x02` |
//! | Issuance | `0x03` |
//! | Transfer | `0x04` |
//! | Transfer offer | `0x05` |

pub mod domain;
pub mod ports;

// Re-export public API
pub use domain::entities::{
    AssetId, Link, ISSUANCE_TAG, OFFER_TAG, REGISTRATION_TAG, TRANSFER_TAG,
};
pub use domain::errors::ParamsError;
pub use domain::issuance::{issues_to_json, IssuanceParams};
pub use domain::offer::TransferOfferParams;
pub use domain::params::Params;
pub use domain::registration::{compute_fingerprint, RegistrationParams};
pub use domain::response::{OfferRecord, Reply, TransferResponseParams};
pub use domain::transfer::TransferParams;
pub use ports::inbound::Signable;
