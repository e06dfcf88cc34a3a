//! Account domain layer.

pub mod errors;
