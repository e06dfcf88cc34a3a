//! # Shared Encoding
//!
//! The byte-level codecs every other component builds on.
//!
//! ## Components
//!
//! | Module | Format | Use Case |
//! |--------|--------|----------|
//! | `varint` | Little-endian base-128 | Key variants, length prefixes, tags |
//! | `hex` | Lowercase hexadecimal | Links, asset ids, signatures in JSON |
//! | `base58` | Bitcoin alphabet Base58 | Encoded seeds, account numbers |
//! | `bytes` | Concat/slice/checksum helpers | Fixed-layout records |
//! | `packing` | Varint length-prefixed fields | Canonical transaction payloads |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod base58;
pub mod bytes;
pub mod errors;
pub mod hex;
pub mod packing;
pub mod varint;

pub use errors::EncodingError;
pub use packing::Packer;
