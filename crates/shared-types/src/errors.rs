//! # Error Taxonomy
//!
//! Classes of failure shared by every component. Each crate defines its own
//! `thiserror` enum and maps variants here via a `kind()` method.

use std::fmt;

/// The class of a failure, independent of which component raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong length, non-hex, empty input, unsupported version.
    Malformed,
    /// Checksum mismatch on a seed, address or recovery phrase.
    Integrity,
    /// Decoded network disagrees with the caller's network.
    NetworkMismatch,
    /// Required fields missing, or rendering/signing out of order.
    Sequencing,
    /// Operation not available for this key capability.
    Unsupported,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Malformed => "malformed input",
            ErrorKind::Integrity => "integrity failure",
            ErrorKind::NetworkMismatch => "network mismatch",
            ErrorKind::Sequencing => "sequencing violation",
            ErrorKind::Unsupported => "unsupported operation",
        };
        f.write_str(name)
    }
}
