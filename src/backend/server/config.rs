/**
 * Server Configuration
 *
 * Configuration is read in this order, later sources winning:
 *
 * 1. Built-in defaults (`0.0.0.0:3000`, filter `info`)
 * 2. The TOML file named by `INKPOST_CONFIG`, if set
 * 3. `BIND_ADDR`, then `SERVER_PORT`, then `RUST_LOG` from the environment
 *
 * Loading runs before tracing is initialised, so callers report errors
 * themselves.
 */

use crate::shared::config::{AppConfig, ConfigError};

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "INKPOST_CONFIG";

/// Load configuration from `INKPOST_CONFIG` and the process environment.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let file = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => Some(std::fs::read_to_string(path)?),
        Err(_) => None,
    };
    resolve_config(file.as_deref(), |key| std::env::var(key).ok())
}

/// Merge file contents and environment lookups into a config.
pub fn resolve_config<F>(file: Option<&str>, env: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let base = match file {
        Some(contents) => AppConfig::from_toml_str(contents)?,
        None => AppConfig::default(),
    };

    let mut builder = AppConfig::builder()
        .bind_addr(env("BIND_ADDR").unwrap_or_else(|| base.bind_addr.to_string()))
        .log_filter(env("RUST_LOG").unwrap_or(base.log_filter));
    if let Some(port) = env("SERVER_PORT") {
        builder = builder.port(port);
    }
    builder.build()
}
