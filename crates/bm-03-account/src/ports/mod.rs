//! Ports for the account subsystem.

pub mod inbound;
