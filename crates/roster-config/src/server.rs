//! Listener configuration.
//!
//! - `HOST`: Bind address (default: `0.0.0.0`)
//! - `PORT`: API port (default: 3000)
//! - `METRICS_PORT`: Prometheus exporter port (default: 9090)

use std::env;

use crate::{ConfigError, parse_var};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub metrics_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            metrics_port: 9090,
        }
    }
}

impl ServerConfig {
    /// Loads the listener settings, keeping defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Fails when a port is not a valid `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("HOST").ok(),
            env::var("PORT").ok(),
            env::var("METRICS_PORT").ok(),
        )
    }

    fn from_values(
        host: Option<String>,
        port: Option<String>,
        metrics_port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            host: host
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
                .unwrap_or(defaults.host),
            port: parse_var("PORT", port, defaults.port)?,
            metrics_port: parse_var("METRICS_PORT", metrics_port, defaults.metrics_port)?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn metrics_addr(&self) -> String {
        format!("{}:{}", self.host, self.metrics_port)
    }
}
