//! SDK configuration.
//!
//! An immutable value built once by the application and handed to the
//! components that need it. Nothing in the workspace keeps a global copy.

use crate::Network;
use std::env;
use thiserror::Error;

/// Environment variable selecting the network.
pub const ENV_NETWORK: &str = "BITMARK_NETWORK";
/// Environment variable holding the API token for the (external) transport.
pub const ENV_API_TOKEN: &str = "BITMARK_API_TOKEN";
/// Environment variable holding the log filter.
pub const ENV_LOG_LEVEL: &str = "BITMARK_LOG_LEVEL";

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable held a value that could not be parsed.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },

    /// The API token was present but empty.
    #[error("API token must not be empty")]
    EmptyApiToken,
}

/// Immutable SDK configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    /// Network every codec call is checked against.
    pub network: Network,
    /// Token consumed by the HTTP transport layer (outside this core).
    pub api_token: Option<String>,
    /// Log filter directive (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            network: Network::Testnet,
            api_token: None,
            log_level: "info".to_string(),
        }
    }
}

impl SdkConfig {
    /// Create a validated configuration for `network`.
    pub fn new(network: Network, api_token: Option<String>) -> Result<Self, ConfigError> {
        let config = Self {
            network,
            api_token,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let network = match env::var(ENV_NETWORK) {
            Ok(raw) => raw.parse::<Network>().map_err(|reason| ConfigError::InvalidValue {
                var: ENV_NETWORK,
                reason,
            })?,
            Err(_) => defaults.network,
        };

        let config = Self {
            network,
            api_token: env::var(ENV_API_TOKEN).ok(),
            log_level: env::var(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
        };
        config.validate()?;

        tracing::debug!(network = %config.network, "SDK configuration loaded");
        Ok(config)
    }

    /// Validate field values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if matches!(&self.api_token, Some(token) if token.trim().is_empty()) {
            return Err(ConfigError::EmptyApiToken);
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: ENV_LOG_LEVEL,
                reason: "log level must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Builder-style method to set the network.
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Builder-style method to set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}
