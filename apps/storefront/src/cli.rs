//! # Command Line Interface
//!
//! `rv-storefront` drives the cart state from a shell, one command per
//! invocation. State carries over between invocations through the store.
//!
//! ```text
//! rv-storefront [--db <PATH> | --memory] <COMMAND>
//!
//!   cart show | add <PRODUCT_JSON> | remove <ID> | clear
//!   wishlist show | toggle <PRODUCT_JSON> | contains <ID>
//!   config
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rv_core::Product;

use crate::error::ApiError;
use crate::state::{ConfigState, StorageBackend};

/// Cart and wishlist state for the rv storefront
#[derive(Debug, Parser)]
#[command(name = "rv-storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// SQLite file holding the persisted cart (overrides RV_DB_PATH)
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "memory")]
    pub db: Option<PathBuf>,

    /// Keep state in memory only; nothing survives the process
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Inspect or change the cart
    #[command(subcommand)]
    Cart(CartCommand),

    /// Inspect or change the wishlist
    #[command(subcommand)]
    Wishlist(WishlistCommand),

    /// Print the effective configuration
    Config,
}

#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Print the cart lines and count
    Show,

    /// Add one unit of a product, given as a JSON object with an "id"
    Add {
        #[arg(value_name = "PRODUCT_JSON")]
        product: String,
    },

    /// Remove a product's line
    Remove { id: String },

    /// Empty the cart
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum WishlistCommand {
    /// Print the saved products
    Show,

    /// Save a product, or un-save it if already saved
    Toggle {
        #[arg(value_name = "PRODUCT_JSON")]
        product: String,
    },

    /// Report whether a product is saved
    Contains { id: String },
}

impl Cli {
    /// Applies the global flags on top of an env-derived configuration.
    pub fn apply_overrides(&self, mut config: ConfigState) -> ConfigState {
        if let Some(path) = &self.db {
            config.storage = StorageBackend::Sqlite;
            config.database_path = Some(path.clone());
        }
        if self.memory {
            config.storage = StorageBackend::Memory;
        }
        config
    }
}

/// Decodes a product payload given on the command line.
pub fn parse_product(raw: &str) -> Result<Product, ApiError> {
    serde_json::from_str(raw)
        .map_err(|e| ApiError::validation(format!("Invalid product payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_nested_subcommand() {
        let cli = Cli::parse_from(["rv-storefront", "cart", "add", r#"{"id":"a"}"#]);

        match cli.command {
            Commands::Cart(CartCommand::Add { product }) => {
                assert_eq!(product, r#"{"id":"a"}"#)
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_flags_override_env_config() {
        let env_config = ConfigState {
            storage: StorageBackend::Memory,
            ..ConfigState::default()
        };

        let cli = Cli::parse_from(["rv-storefront", "--db", "/tmp/x.db", "config"]);
        let config = cli.apply_overrides(env_config.clone());
        assert_eq!(config.storage, StorageBackend::Sqlite);
        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/x.db")));

        let cli = Cli::parse_from(["rv-storefront", "wishlist", "show", "--memory"]);
        let config = cli.apply_overrides(ConfigState::default());
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    fn test_db_and_memory_conflict() {
        let result =
            Cli::try_parse_from(["rv-storefront", "--db", "/tmp/x.db", "--memory", "config"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_product() {
        let product = parse_product(r#"{"id":"a","name":"Widget","priceNum":10}"#).unwrap();
        assert_eq!(product.id.as_str(), "a");
        assert_eq!(product.name(), Some("Widget"));

        let err = parse_product(r#"{"name":"no id"}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(parse_product("not json").is_err());
    }
}
