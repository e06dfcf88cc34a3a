//! # Account Subsystem (BM-03)
//!
//! Ties the lower subsystems together: a seed (BM-01) yields the signing and
//! encryption key pairs, and the signing public key plus the network yields
//! the account number (BM-02).
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): error types
//! - **Ports Layer** (`ports/`): the `AccountApi` trait
//! - **Service Layer** (`service.rs`): the `Account` that implements it
//!
//! ## Network Context
//!
//! Every constructor and every static helper takes the caller's [`Network`]
//! explicitly. A seed or account number that belongs to another network is
//! rejected with a network-mismatch error.
//!
//! [`Network`]: shared_types::Network

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::errors::AccountError;
pub use ports::inbound::AccountApi;
pub use service::Account;
