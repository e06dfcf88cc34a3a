//! Telemetry configuration from environment variables.

use shared_types::SdkConfig;
use std::env;

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to the startup event
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "bitmark-sdk".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `BITMARK_SERVICE_NAME`: Service name (default: bitmark-sdk)
    /// - `BITMARK_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `BITMARK_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("BITMARK_SERVICE_NAME")
                .unwrap_or_else(|_| "bitmark-sdk".to_string()),

            log_level: env::var("BITMARK_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("BITMARK_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Take the log level from an SDK configuration.
    pub fn for_sdk(sdk: &SdkConfig) -> Self {
        Self {
            log_level: sdk.log_level.clone(),
            ..Self::default()
        }
    }
}
