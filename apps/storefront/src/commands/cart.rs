//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   add_to_cart    ┌──────────┐                            │
//! │  │  Empty   │─────────────────►│ In Cart  │◄──┐ add_to_cart (qty + 1)  │
//! │  │  Cart    │◄─────────────────│          │───┘                         │
//! │  └──────────┘   clear_cart /   └──────────┘                            │
//! │                 last remove          │                                  │
//! │                                      ▼                                  │
//! │                             rv_cart rewritten                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rv_core::{CartLine, Product};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartProvider, CartStore};

/// Cart response including items and the header badge count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub cart_count: u64,
}

impl From<&CartStore> for CartResponse {
    fn from(store: &CartStore) -> Self {
        CartResponse {
            items: store.cart().to_vec(),
            cart_count: store.cart_count(),
        }
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current lines in insertion order and the summed quantity
pub fn get_cart(provider: &CartProvider) -> Result<CartResponse, ApiError> {
    debug!("get_cart command");
    Ok(CartResponse::from(provider.cart()?))
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases by one
/// - If product not in cart: appended with name, price and image captured now
/// - Later changes to the product never touch an existing line
pub async fn add_to_cart(
    provider: &mut CartProvider,
    product: Product,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product.id, "add_to_cart command");

    let store = provider.cart_mut()?;
    store.add_to_cart(&product).await;
    Ok(CartResponse::from(&*store))
}

/// Removes a product's line from the cart.
///
/// Unknown IDs are not an error; the cart comes back unchanged.
pub async fn remove_from_cart(
    provider: &mut CartProvider,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "remove_from_cart command");

    let store = provider.cart_mut()?;
    store.remove_from_cart(product_id).await;
    Ok(CartResponse::from(&*store))
}

/// Clears all items from the cart.
pub async fn clear_cart(provider: &mut CartProvider) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");

    let store = provider.cart_mut()?;
    store.clear_cart().await;
    Ok(CartResponse::from(&*store))
}
