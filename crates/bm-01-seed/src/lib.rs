//! # Seed Subsystem (BM-01)
//!
//! Everything an account derives from its root secret.
//!
//! ## Architecture
//!
//! - **Seed** (`domain/seed.rs`): versioned core bytes tagged with a network
//! - **Seed codec** (`domain/codec.rs`): Base58 token with magic and checksum
//! - **Mnemonic codec** (`domain/mnemonic.rs`): 12 or 24 word recovery phrase
//! - **Key derivation** (`domain/derivation.rs`): signing and encryption pairs
//!
//! ## Versions
//!
//! | Version | Core | Encoded | Phrase |
//! |---------|------|---------|--------|
//! | 1 | 32 bytes | 40 bytes | 24 words |
//! | 2 | 16 bytes | 24 bytes | 12 words |
//!
//! ## Security Notes
//!
//! - Core bytes and phrase words are zeroized on drop
//! - `Debug` output never contains secret material
//! - Key material is expanded through a one-way function per capability

pub mod domain;

// Re-export public API
pub use domain::codec::{decode, encode, SEED_MAGIC};
pub use domain::derivation::{derive, AUTH_KEY_COUNTER, ENC_KEY_COUNTER};
pub use domain::errors::SeedError;
pub use domain::mnemonic::{Locale, RecoveryPhrase};
pub use domain::seed::{Seed, SeedVersion};
