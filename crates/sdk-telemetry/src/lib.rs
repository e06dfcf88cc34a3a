//! # SDK Telemetry
//!
//! Structured logging for applications embedding the SDK core.
//!
//! The core crates only emit `tracing` events; nothing is printed until the
//! host application installs a subscriber. This crate installs one from a
//! [`TelemetryConfig`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sdk_telemetry::{init_logging, TelemetryConfig};
//!
//! let _guard = init_logging(&TelemetryConfig::from_env()).expect("logging");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BITMARK_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `BITMARK_JSON_LOGS` | `false` | Emit JSON lines |
//! | `BITMARK_SERVICE_NAME` | `bitmark-sdk` | Service name field |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{init_logging, LoggingGuard};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Failed to install subscriber: {0}")]
    SubscriberInit(String),
}

/// Emit an event tagged with the SDK component that produced it.
///
/// # Example
///
/// ```rust,ignore
/// sdk_telemetry::log_event!(warn, "address", "checksum mismatch", length = 37);
/// ```
#[macro_export]
macro_rules! log_event {
    ($level:ident, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };
}
