//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--db`, `--memory`)
//! 2. Environment variables (`RV_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only once the session starts.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,rv=debug,sqlx=warn";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Display name of the storefront
    pub store_name: String,

    /// Where cart state is persisted
    pub storage: StorageBackend,

    /// SQLite file override. `None` means the platform data directory.
    pub database_path: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

/// Backing store for the persisted cart and wishlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// SQLite file, survives restarts
    #[default]
    Sqlite,

    /// Process memory, gone on exit
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!("unknown storage backend '{other}'")),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Sqlite => f.write_str("sqlite"),
            StorageBackend::Memory => f.write_str("memory"),
        }
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "rv storefront".to_string(),
            storage: StorageBackend::Sqlite,
            database_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `RV_DB_PATH`: SQLite file to use
    /// - `RV_STORAGE`: `sqlite` or `memory`
    /// - `RV_STORE_NAME`: Override store name
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(path) = lookup("RV_DB_PATH").filter(|p| !p.trim().is_empty()) {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Some(storage) = lookup("RV_STORAGE") {
            match storage.parse() {
                Ok(backend) => config.storage = backend,
                Err(err) => tracing::warn!(%err, "Ignoring RV_STORAGE"),
            }
        }

        if let Some(store_name) = lookup("RV_STORE_NAME") {
            config.store_name = store_name;
        }

        config
    }
}
