//! # Server Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STITCH_HOST, STITCH_PORT (or PORT), STITCH_DATA_FILE,              │
//! │     STITCH_STATIC_DIR                                                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $STITCH_CONFIG, or                                                 │
//! │     ~/.config/stitch/server.toml (Linux)                               │
//! │     ~/Library/Application Support/com.stitch.stitch/server.toml (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     0.0.0.0:3000, data/db.json, no static assets                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # server.toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [storage]
//! data_file = "/var/lib/stitch/db.json"
//! pretty = true
//!
//! [assets]
//! static_dir = "./public"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stitch_store::StoreConfig;
use thiserror::Error;
use tracing::{debug, info};

// =============================================================================
// Errors
// =============================================================================

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// `[server]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// `[storage]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// JSON data file. Relative paths resolve against the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data").join("db.json")
}

fn default_true() -> bool {
    true
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            data_file: default_data_file(),
            pretty: true,
        }
    }
}

/// `[assets]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetSettings {
    /// Directory served for any path the API doesn't handle.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

// =============================================================================
// Server Config
// =============================================================================

/// Complete server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub assets: AssetSettings,
}

impl ServerConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, else `$STITCH_CONFIG`, else the
    ///    platform config dir). A missing file is not an error.
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var_os("STITCH_CONFIG").map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading server config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies overrides from an environment-like lookup.
    ///
    /// `STITCH_PORT` wins over `PORT` when both are set.
    pub fn apply_overrides<F>(&mut self, var: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = var("STITCH_HOST") {
            debug!(host = %host, "Overriding host from environment");
            self.server.host = host;
        }

        for key in ["PORT", "STITCH_PORT"] {
            if let Some(port) = var(key) {
                self.server.port = port
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue(key.to_string()))?;
                debug!(port = self.server.port, "Overriding port from {}", key);
            }
        }

        if let Some(path) = var("STITCH_DATA_FILE") {
            debug!(path = %path, "Overriding data file from environment");
            self.storage.data_file = PathBuf::from(path);
        }

        if let Some(dir) = var("STITCH_STATIC_DIR") {
            self.assets.static_dir = if dir.is_empty() {
                None
            } else {
                Some(PathBuf::from(dir))
            };
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid("server.host must not be empty".into()));
        }

        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be greater than 0".into()));
        }

        if self.storage.data_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("storage.data_file must not be empty".into()));
        }

        Ok(())
    }

    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Store settings derived from the `[storage]` section.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.storage.data_file).pretty(self.storage.pretty)
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stitch", "stitch")
            .map(|dirs| dirs.config_dir().join("server.toml"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
