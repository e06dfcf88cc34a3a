//! Canonical binary packing.
//!
//! A payload is built left to right: a varint tag, then each field as
//! `varint(len) | bytes`, with fixed-width markers appended raw. The ledger
//! recomputes exactly these bytes to verify a signature, so field order is
//! part of the protocol.

use crate::varint;

/// Running buffer for a canonical payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Packer {
    buffer: Vec<u8>,
}

impl Packer {
    /// Start a payload with `varint(tag)`.
    pub fn with_tag(tag: u64) -> Self {
        Self {
            buffer: varint::encode(tag),
        }
    }

    /// Continue packing after an existing payload.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { buffer: bytes }
    }

    /// Append `varint(len) | bytes`.
    pub fn field(mut self, bytes: &[u8]) -> Self {
        self.buffer.extend(varint::encode_usize(bytes.len()));
        self.buffer.extend_from_slice(bytes);
        self
    }

    /// Append a UTF-8 string as a length-prefixed field.
    pub fn string(self, value: &str) -> Self {
        self.field(value.as_bytes())
    }

    /// Append a bare varint (no length prefix).
    pub fn varint(mut self, value: u64) -> Self {
        self.buffer.extend(varint::encode(value));
        self
    }

    /// Append fixed-width bytes verbatim.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buffer.extend_from_slice(bytes);
        self
    }

    /// Finish and return the payload.
    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }
}

/// Appends `varint(len(from)) | from` to `to`.
pub fn append_field(to: &[u8], from: &[u8]) -> Vec<u8> {
    Packer::from_bytes(to.to_vec()).field(from).finish()
}
