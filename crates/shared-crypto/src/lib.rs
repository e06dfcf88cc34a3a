//! # Shared Crypto - Cryptographic Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA3-256, SHA3-512 | Checksums, links, asset ids |
//! | `symmetric` | XSalsa20-Poly1305 secret box | Seed-to-key expansion |
//! | `signatures` | Ed25519 | Transaction and message signing |
//! | `boxes` | X25519 | Encryption key pair |
//! | `key_pair` | - | Capability-tagged key pair |
//! | `signer` | Ed25519 | Stateless sign/verify over raw bytes |
//!
//! ## Security Properties
//!
//! - **Ed25519**: Deterministic nonces, no RNG dependency when signing
//! - **Secret material**: signing and box secrets are zeroized on drop

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boxes;
pub mod errors;
pub mod hashing;
pub mod key_pair;
pub mod signatures;
pub mod signer;
pub mod symmetric;

// Re-exports
pub use boxes::{BoxKeyPair, BOX_PRIVATE_KEY_LENGTH, BOX_PUBLIC_KEY_LENGTH};
pub use errors::CryptoError;
pub use hashing::{checksum, sha3_256, sha3_256_many, sha3_512};
pub use key_pair::{Capability, KeyPair};
pub use signatures::{
    Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature, ED25519_PRIVATE_KEY_LENGTH,
    ED25519_PUBLIC_KEY_LENGTH, ED25519_SIGNATURE_LENGTH,
};
pub use symmetric::seal_counter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
