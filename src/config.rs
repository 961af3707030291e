//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub advisor: AdvisorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

fn default_db_path() -> String {
    dirs::data_local_dir()
        .map(|p| {
            p.join("spendwise")
                .join("spendwise.db")
                .to_string_lossy()
                .to_string()
        })
        .unwrap_or_else(|| "./spendwise.db".to_string())
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_seed_demo_data() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

/// Advisor service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorConfig {
    /// Enable calls to the external completion service
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_advisor_url")]
    pub url: String,

    #[serde(default = "default_advisor_timeout")]
    pub request_timeout_ms: u64,
}

fn default_advisor_url() -> String {
    "http://localhost:8090".to_string()
}

fn default_advisor_timeout() -> u64 {
    5000
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: default_advisor_url(),
            request_timeout_ms: default_advisor_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("spendwise").join("config.toml")),
            Some(PathBuf::from("/etc/spendwise/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Store overrides
        if let Ok(db_path) = std::env::var("SPENDWISE_DB_PATH") {
            self.store.db_path = db_path;
        }

        // API overrides
        if let Ok(host) = std::env::var("SPENDWISE_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("SPENDWISE_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Advisor overrides
        if let Ok(url) = std::env::var("SPENDWISE_ADVISOR_URL") {
            self.advisor.url = url;
            self.advisor.enabled = true;
        }

        // Logging overrides
        if let Ok(level) = std::env::var("SPENDWISE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SPENDWISE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Spendwise Configuration
#
# Environment variables override these settings:
# - SPENDWISE_DB_PATH
# - SPENDWISE_API_HOST
# - SPENDWISE_API_PORT
# - SPENDWISE_ADVISOR_URL
# - SPENDWISE_LOG_LEVEL
# - SPENDWISE_LOG_FORMAT

[store]
# Path of the SQLite database file
db_path = "~/.local/share/spendwise/spendwise.db"

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8080

# Insert mock spending rows on startup when the table is empty
seed_demo_data = true

[advisor]
# Enable the external AI completion service
enabled = false

# Completion service URL
url = "http://localhost:8090"

# Request timeout in milliseconds
request_timeout_ms = 5000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 8080);
        assert!(!config.advisor.enabled);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[api]\nport = 9000\n").unwrap();
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "0.0.0.0");
        assert!(config.api.seed_demo_data);
    }
}
