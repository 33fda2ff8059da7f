//! # Runtime Configuration
//!
//! Unified configuration for the stores, subsystems and HTTP surface.
//!
//! ## Loading Order
//!
//! 1. Defaults
//! 2. TOML file named by `SL_CONFIG` (optional)
//! 3. Environment overrides (`SL_HTTP_HOST`, `SL_HTTP_PORT`, `SL_STORE_PATH`,
//!    `SL_SEED_PATH`, `SL_EXPIRING_SOON_DAYS`)
//! 4. Validation

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sl_01_ingredient_ledger::LedgerConfig;
use sl_04_api_gateway::{CorsConfig, GatewayConfig};
use thiserror::Error;

/// Environment variable naming the TOML config file.
pub const CONFIG_PATH_ENV: &str = "SL_CONFIG";

/// Longest accepted default look-ahead for the expiring-soon view.
const MAX_EXPIRING_SOON_DAYS: u32 = 365;

/// Complete runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// HTTP listener.
    pub server: GatewayConfig,
    /// Record store backend.
    pub store: StoreConfig,
    /// Ledger tuning.
    pub inventory: InventoryConfig,
    /// Startup seed import.
    pub seed: SeedConfig,
    /// Browser access policy.
    pub cors: CorsConfig,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl RuntimeConfig {
    /// Loads the configuration from `SL_CONFIG` and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        config.apply_overrides(|var| std::env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML file. Missing sections take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies environment overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SL_HTTP_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SL_HTTP_PORT") {
            self.server.port = parse_env("SL_HTTP_PORT", port)?;
        }
        if let Some(path) = lookup("SL_STORE_PATH") {
            self.store.path = PathBuf::from(path);
        }
        if let Some(path) = lookup("SL_SEED_PATH") {
            self.seed.path = PathBuf::from(path);
        }
        if let Some(days) = lookup("SL_EXPIRING_SOON_DAYS") {
            self.inventory.expiring_soon_days = parse_env("SL_EXPIRING_SOON_DAYS", days)?;
        }
        Ok(())
    }

    /// Rejects settings the runtime cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server
            .socket_addr()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if self.inventory.expiring_soon_days > MAX_EXPIRING_SOON_DAYS {
            return Err(ConfigError::Invalid(format!(
                "inventory.expiring_soon_days must be at most {}, got {}",
                MAX_EXPIRING_SOON_DAYS, self.inventory.expiring_soon_days
            )));
        }

        if self.store.backend == StoreBackend::RocksDb {
            if !cfg!(feature = "rocksdb") {
                return Err(ConfigError::Invalid(
                    "store.backend = \"rocksdb\" requires the `rocksdb` feature".to_string(),
                ));
            }
            if self.store.path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(
                    "store.path must be set for the rocksdb backend".to_string(),
                ));
            }
        }

        if self.seed.enabled && self.seed.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "seed.path must be set when seeding is enabled".to_string(),
            ));
        }

        Ok(())
    }

    /// Ledger settings derived from the `inventory` section.
    pub fn ledger_config(&self) -> LedgerConfig {
        LedgerConfig {
            expiring_soon_days: self.inventory.expiring_soon_days,
        }
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}

/// Which store implementation backs both record sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local maps; contents are lost on exit.
    #[default]
    Memory,
    /// RocksDB with one column family per record set.
    #[serde(alias = "rocks_db")]
    RocksDb,
}

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Database directory (RocksDB only).
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            path: PathBuf::from("./data/shelf-life"),
        }
    }
}

/// Inventory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Default look-ahead for `/get-expiring-ingredients`, in days.
    pub expiring_soon_days: u32,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            expiring_soon_days: LedgerConfig::default().expiring_soon_days,
        }
    }
}

/// Seed import configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Import the seed document at startup when both record sets are empty.
    pub enabled: bool,
    pub path: PathBuf,
    /// Clear both record sets at shutdown.
    pub purge_on_shutdown: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from("data.json"),
            purge_on_shutdown: false,
        }
    }
}
