//! Transaction domain layer.

pub mod entities;
pub mod errors;
pub mod issuance;
pub mod offer;
pub mod params;
pub mod registration;
pub mod response;
pub mod transfer;
