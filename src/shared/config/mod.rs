//! Application configuration module
//!
//! Provides configuration types for the application. Values come from an
//! optional TOML file and environment overrides; see
//! `backend::server::config::load_config` for the loading order.

use std::net::SocketAddr;

use serde::Deserialize;
use thiserror::Error;

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse a configuration file.
    ///
    /// Every key is optional:
    ///
    /// ```toml
    /// bind_addr = "127.0.0.1:8080"
    /// log_filter = "inkpost=debug,tower_http=info"
    /// ```
    pub fn from_toml_str(input: &str) -> Result<AppConfig, ConfigError> {
        let file: ConfigFile = toml::from_str(input)?;
        let mut builder = AppConfig::builder();
        if let Some(addr) = file.bind_addr {
            builder = builder.bind_addr(addr);
        }
        if let Some(filter) = file.log_filter {
            builder = builder.log_filter(filter);
        }
        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::MissingValue("log_filter"));
        }
        Ok(())
    }
}

/// On-disk shape of the configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    bind_addr: Option<String>,
    log_filter: Option<String>,
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    bind_addr: Option<String>,
    port: Option<String>,
    log_filter: Option<String>,
}

impl AppConfigBuilder {
    /// Set the full listen address (`host:port`)
    pub fn bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.bind_addr = Some(addr.into());
        self
    }

    /// Override only the port of the listen address
    pub fn port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Set the tracing filter
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let raw = self
            .bind_addr
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let mut bind_addr: SocketAddr = raw
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(raw.clone()))?;

        if let Some(port) = self.port {
            let port: u16 = port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
            bind_addr.set_port(port);
        }

        let config = AppConfig {
            bind_addr,
            log_filter: self
                .log_filter
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address: {0}")]
    InvalidAddress(String),
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("config file parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config file read error: {0}")]
    Io(#[from] std::io::Error),
}
