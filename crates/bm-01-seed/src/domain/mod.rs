//! Seed domain layer. Pure functions, no I/O.

pub mod codec;
pub mod derivation;
pub mod errors;
pub mod mnemonic;
pub mod seed;
