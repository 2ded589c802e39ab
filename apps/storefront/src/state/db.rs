//! # Store Opening
//!
//! Turns the configuration into a [`SharedStore`].
//!
//! ## Platform-Specific Paths
//! - **macOS**: `~/Library/Application Support/com.rv.storefront/rv-storefront.db`
//! - **Windows**: `%APPDATA%\rv\storefront\data\rv-storefront.db`
//! - **Linux**: `~/.local/share/storefront/rv-storefront.db`

use std::path::PathBuf;
use std::sync::Arc;

use directories::ProjectDirs;
use rv_db::{Database, DbConfig, MemoryStore};
use tracing::info;

use crate::error::ApiError;
use crate::state::cart::SharedStore;
use crate::state::config::{ConfigState, StorageBackend};

const DATABASE_FILE: &str = "rv-storefront.db";

/// Resolves the SQLite file, creating the data directory if needed.
pub fn database_path(config: &ConfigState) -> Result<PathBuf, ApiError> {
    if let Some(path) = &config.database_path {
        return Ok(path.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "rv", "storefront")
        .ok_or_else(|| ApiError::internal("Could not determine app data directory"))?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir).map_err(|e| {
        ApiError::internal(format!(
            "Could not create data directory {}: {e}",
            data_dir.display()
        ))
    })?;

    Ok(data_dir.join(DATABASE_FILE))
}

/// Opens the configured backend.
pub async fn open_store(config: &ConfigState) -> Result<SharedStore, ApiError> {
    match config.storage {
        StorageBackend::Memory => {
            info!("Using in-memory store, nothing will persist");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::Sqlite => {
            let path = database_path(config)?;
            info!(?path, "Opening SQLite store");

            let db = Database::new(DbConfig::new(path)).await?;
            Ok(Arc::new(db))
        }
    }
}
