//! # Bitmark SDK Core Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenarios.rs   # Published vectors: phrases, accounts, signatures
//!     └── flows.rs       # Account -> register -> issue -> offer -> accept
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bm-tests
//! cargo test -p bm-tests integration::scenarios::
//! ```

pub mod integration;
