//! # State Module
//!
//! Session state for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                        AppState                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                 │                                  │                    │
//! │                 ▼                                  ▼                    │
//! │  ┌──────────────────────────┐      ┌───────────────────────────────┐   │
//! │  │     ConfigState          │      │     CartProvider              │   │
//! │  │  store_name, storage,    │      │  Option<CartStore>            │   │
//! │  │  database_path           │      │    ├── Cart                   │   │
//! │  │  (read only)             │      │    ├── Wishlist               │   │
//! │  └──────────────────────────┘      │    └── SharedStore (rv-db)    │   │
//! │                                    └───────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod db;
mod provider;

pub use cart::{CartStore, SharedStore};
pub use config::{ConfigState, StorageBackend, DEFAULT_LOG_FILTER};
pub use db::{database_path, open_store};
pub use provider::CartProvider;

/// Everything a command may need.
#[derive(Debug)]
pub struct AppState {
    pub config: ConfigState,
    pub cart: CartProvider,
}

impl AppState {
    /// Opens the configured store and mounts the cart provider over it.
    pub async fn start(config: ConfigState) -> Result<Self, crate::error::ApiError> {
        let store = open_store(&config).await?;
        let cart = CartProvider::provide(store).await;
        Ok(AppState { config, cart })
    }

    /// State with no cart mounted, for commands that never touch the cart.
    pub fn detached(config: ConfigState) -> Self {
        AppState {
            config,
            cart: CartProvider::detached(),
        }
    }
}
