use std::path::Path;

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Default Aviationstack REST endpoint.
const DEFAULT_BASE_URL: &str = "https://api.aviationstack.com/v1";

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Root of the Aviationstack REST API, without a trailing slash.
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
}

impl Config {
    /// Loads configuration from `config.toml` in the working directory.
    pub fn new() -> Result<Self, ConfigurationError> {
        Self::load_from_path("config.toml")
    }

    /// Loads configuration from a specific file path.
    ///
    /// Built-in defaults are used when the file is absent; either way,
    /// `FLIGHT_CHECK`-prefixed environment variables override the result
    /// (e.g. `FLIGHT_CHECK_API__BASE_URL`).
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigurationError> {
        let mut builder =
            config::Config::builder().set_default("api.base_url", DEFAULT_BASE_URL)?;

        if config_path.as_ref().exists() {
            debug!(
                "Loading configuration from: {}",
                config_path.as_ref().display()
            );
            builder = builder.add_source(File::from(config_path.as_ref()));
        } else {
            debug!("Config file not found, using defaults and environment variables");
        }

        builder = builder.add_source(Environment::with_prefix("FLIGHT_CHECK").separator("__"));

        Ok(builder.build()?.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_apply_without_a_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from_path(temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config.api.base_url, "https://api.aviationstack.com/v1");
    }

    #[test]
    fn test_config_file_overrides_base_url() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[api]\nbase_url = \"http://localhost:8089/v1\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8089/v1");
    }
}
