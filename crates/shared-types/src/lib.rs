//! # Shared Types Crate
//!
//! Types every other crate in the workspace agrees on.
//!
//! ## Design Principles
//!
//! - **Explicit network context**: no component reads a global network
//!   setting. Callers hold an [`SdkConfig`] and pass its [`Network`] into
//!   every network-sensitive call.
//! - **One taxonomy**: each crate owns its error enum, but every variant maps
//!   onto an [`ErrorKind`] so callers can branch on the class of failure.

pub mod config;
pub mod entities;
pub mod errors;

pub use config::{ConfigError, SdkConfig};
pub use entities::*;
pub use errors::ErrorKind;
