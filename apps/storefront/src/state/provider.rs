//! # Cart Provider
//!
//! The scope inside which cart state exists.
//!
//! Code that reaches for the cart must run under a mounted provider. Asking a
//! detached provider for the cart is an integration mistake and fails with
//! [`ErrorCode::ProviderMissing`](crate::error::ErrorCode::ProviderMissing)
//! rather than handing out an empty cart.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartProvider::provide(store) ──► Some(CartStore) ──► cart() ──► Ok     │
//! │  CartProvider::detached()     ──► None            ──► cart() ──► Err    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ApiError;
use crate::state::cart::{CartStore, SharedStore};

/// Holds the session's single `CartStore`, if one was mounted.
#[derive(Debug, Default)]
pub struct CartProvider {
    store: Option<CartStore>,
}

impl CartProvider {
    /// Mounts a provider over `store`, restoring any persisted state.
    pub async fn provide(store: SharedStore) -> Self {
        CartProvider {
            store: Some(CartStore::load(store).await),
        }
    }

    /// A provider with nothing mounted.
    pub fn detached() -> Self {
        CartProvider::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.store.is_some()
    }

    /// Borrows the mounted cart state.
    pub fn cart(&self) -> Result<&CartStore, ApiError> {
        self.store.as_ref().ok_or_else(ApiError::provider_missing)
    }

    /// Mutably borrows the mounted cart state.
    pub fn cart_mut(&mut self) -> Result<&mut CartStore, ApiError> {
        self.store.as_mut().ok_or_else(ApiError::provider_missing)
    }
}
