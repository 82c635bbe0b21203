//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::atm::{DEFAULT_ZOOM, OSM_TILE_URL};
use crate::market::{MarketClientConfig, DEFAULT_BASE_URL};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub market: MarketConfig,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Market data source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MarketConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_vs_currency")]
    pub vs_currency: String,

    #[serde(default = "default_per_page")]
    pub per_page: u32,

    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_vs_currency() -> String {
    "usd".to_string()
}

fn default_per_page() -> u32 {
    10
}

fn default_poll_interval() -> u64 {
    30
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            vs_currency: default_vs_currency(),
            per_page: default_per_page(),
            poll_interval_secs: default_poll_interval(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl MarketConfig {
    /// Client settings derived from this section
    pub fn client_config(&self) -> MarketClientConfig {
        MarketClientConfig {
            base_url: self.api_url.clone(),
            vs_currency: self.vs_currency.clone(),
            per_page: self.per_page,
            api_key: self.api_key.clone().filter(|k| !k.is_empty()),
            request_timeout_ms: self.request_timeout_secs.saturating_mul(1000),
        }
    }

    /// Polling interval, never shorter than one second
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }
}

/// ATM map configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_zoom")]
    pub zoom: u8,

    #[serde(default = "default_tile_url")]
    pub tile_url: String,
}

fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}

fn default_tile_url() -> String {
    OSM_TILE_URL.to_string()
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: default_zoom(),
            tile_url: default_tile_url(),
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
            dirs::config_dir().map(|p| p.join("localcoin").join("config.toml")),
            Some(PathBuf::from("/etc/localcoin/config.toml")),
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
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("LOCALCOIN_API_URL") {
            self.market.api_url = url;
        }
        // COINGECKO_API_KEY is the name the hosted dashboard used
        if let Some(key) = var("LOCALCOIN_API_KEY").or_else(|| var("COINGECKO_API_KEY")) {
            self.market.api_key = Some(key);
        }
        if let Some(secs) = var("LOCALCOIN_POLL_INTERVAL_SECS") {
            if let Ok(s) = secs.parse() {
                self.market.poll_interval_secs = s;
            }
        }

        if let Some(level) = var("LOCALCOIN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("LOCALCOIN_LOG_FORMAT") {
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
    r#"# Localcoin Configuration
#
# Environment variables override these settings:
# - LOCALCOIN_API_URL
# - LOCALCOIN_API_KEY (or COINGECKO_API_KEY)
# - LOCALCOIN_POLL_INTERVAL_SECS
# - LOCALCOIN_LOG_LEVEL
# - LOCALCOIN_LOG_FORMAT

[market]
# CoinGecko API base URL
api_url = "https://api.coingecko.com/api/v3"

# Optional CoinGecko demo API key (sent as x-cg-demo-api-key)
# api_key = ""

# Quote currency
vs_currency = "usd"

# Number of coins to fetch (top N by market cap)
per_page = 10

# How often to refresh prices (seconds)
poll_interval_secs = 30

# Request timeout in seconds
request_timeout_secs = 10

[map]
# Zoom level when focusing an ATM
zoom = 13

# Tile server URL template
tile_url = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"

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
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.market.poll_interval_secs, 30);
        assert_eq!(config.market.per_page, 10);
        assert_eq!(config.map.zoom, 13);
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.market.poll_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_huge_request_timeout_saturates() {
        let mut config = Config::default();
        assert_eq!(config.market.client_config().request_timeout_ms, 10_000);

        config.market.request_timeout_secs = u64::MAX;
        assert_eq!(config.market.client_config().request_timeout_ms, u64::MAX);
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(config.market.api_url, defaults.market.api_url);
        assert_eq!(config.market.poll_interval_secs, defaults.market.poll_interval_secs);
        assert_eq!(config.map.tile_url, defaults.map.tile_url);
        assert!(config.market.api_key.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[market]\napi_key = \"abc\"\npoll_interval_secs = 60").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.market.api_key.as_deref(), Some("abc"));
        assert_eq!(config.market.poll_interval_secs, 60);
        assert_eq!(config.market.vs_currency, "usd");
        assert_eq!(config.map.zoom, 13);
    }

    #[test]
    fn test_load_errors() {
        let err = Config::load(Path::new("/nonexistent/localcoin.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[market\nbroken").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("COINGECKO_API_KEY", "legacy"),
            ("LOCALCOIN_POLL_INTERVAL_SECS", "not-a-number"),
            ("LOCALCOIN_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.market.api_key.as_deref(), Some("legacy"));
        assert_eq!(config.market.poll_interval_secs, 30);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_empty_api_key_is_not_sent() {
        let mut config = Config::default();
        config.market.api_key = Some(String::new());
        assert!(config.market.client_config().api_key.is_none());
    }
}
