//! Ports for the transaction subsystem.

pub mod inbound;
