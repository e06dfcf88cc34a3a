//! Address domain layer.

pub mod address;
pub mod errors;
