//! Client configuration

use serde::Deserialize;
use std::time::Duration;

/// Endpoint and runtime configuration for the API clients
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Banking/IRP gateway base URL
    pub base_url: String,
    /// Insurance service base URL
    pub insurance_base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Log level
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            insurance_base_url: "http://localhost:8080/api/insurance".to_string(),
            timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("INPLAN"))
            .build()?
            .try_deserialize()
    }

    /// The request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
