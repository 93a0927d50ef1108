//! Configuration management for the ReviewHub client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with RH_ prefix

use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// REST API configuration
    pub api: ApiConfig,

    /// Browse page behavior
    pub browse: BrowseConfig,

    /// Log output
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Origin serving `/api/...`, without a trailing slash
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BrowseConfig {
    /// Quiet period before a filter change issues its request
    pub debounce_ms: u64,

    /// Businesses per page
    pub page_size: u32,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` wins when set
    pub filter: Option<String>,

    /// Emit JSON lines instead of the human formatter
    pub json: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("RH_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "http://localhost:8000")?
            .set_default("browse.debounce_ms", 300)?
            .set_default("browse.page_size", 20)?
            .set_default("logging.json", false)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (RH_ prefix)
            .add_source(
                Environment::with_prefix("RH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl BrowseConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            api: ApiConfig::default(),
            browse: BrowseConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            page_size: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_browse_behavior() {
        let config = Config::default();
        assert_eq!(config.browse.debounce(), Duration::from_millis(300));
        assert_eq!(config.browse.page_size, 20);
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let config = Config::load().expect("defaults should deserialize");
        assert_eq!(config.browse.debounce_ms, 300);
        assert!(config.logging.filter.is_none());
    }
}
