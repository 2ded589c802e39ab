//! # Wishlist Commands
//!
//! Saving products for later. Entries are kept exactly as the catalog sent
//! them, and the wishlist never touches the cart.

use rv_core::{Product, ProductId, Toggle};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartProvider, CartStore};

/// Wishlist contents and count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub items: Vec<Product>,
    pub wishlist_count: usize,

    /// What the last toggle did, absent for plain reads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggled: Option<Toggle>,
}

impl From<&CartStore> for WishlistResponse {
    fn from(store: &CartStore) -> Self {
        WishlistResponse {
            items: store.wishlist().to_vec(),
            wishlist_count: store.wishlist_count(),
            toggled: None,
        }
    }
}

/// Answer to "is this product saved?".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResponse {
    pub id: ProductId,
    pub in_wishlist: bool,
}

/// Gets the saved products in the order they were saved.
pub fn get_wishlist(provider: &CartProvider) -> Result<WishlistResponse, ApiError> {
    debug!("get_wishlist command");
    Ok(WishlistResponse::from(provider.cart()?))
}

/// Saves the product, or un-saves it if it was already saved.
pub async fn toggle_wishlist(
    provider: &mut CartProvider,
    product: Product,
) -> Result<WishlistResponse, ApiError> {
    debug!(product_id = %product.id, "toggle_wishlist command");

    let store = provider.cart_mut()?;
    let toggle = store.toggle_wishlist(product).await;

    Ok(WishlistResponse {
        toggled: Some(toggle),
        ..WishlistResponse::from(&*store)
    })
}

pub fn is_in_wishlist(
    provider: &CartProvider,
    product_id: &str,
) -> Result<MembershipResponse, ApiError> {
    debug!(product_id = %product_id, "is_in_wishlist command");

    Ok(MembershipResponse {
        id: ProductId::from(product_id),
        in_wishlist: provider.cart()?.is_in_wishlist(product_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use rv_db::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_toggle_twice_restores_membership() {
        let mut provider = CartProvider::provide(Arc::new(MemoryStore::new())).await;
        let product = Product::new("b").with("pillar", "DESTROY");

        let response = toggle_wishlist(&mut provider, product.clone()).await.unwrap();
        assert_eq!(response.toggled, Some(Toggle::Added));
        assert_eq!(response.wishlist_count, 1);
        assert!(is_in_wishlist(&provider, "b").unwrap().in_wishlist);

        let response = toggle_wishlist(&mut provider, product).await.unwrap();
        assert_eq!(response.toggled, Some(Toggle::Removed));
        assert_eq!(response.wishlist_count, 0);
        assert!(!is_in_wishlist(&provider, "b").unwrap().in_wishlist);
    }

    #[tokio::test]
    async fn test_entries_keep_every_field() {
        let mut provider = CartProvider::provide(Arc::new(MemoryStore::new())).await;
        toggle_wishlist(
            &mut provider,
            Product::new("b").with("pillar", "DESTROY").with("priceNum", 42),
        )
        .await
        .unwrap();

        let value = serde_json::to_value(get_wishlist(&provider).unwrap()).unwrap();

        assert_eq!(value["wishlistCount"], 1);
        assert_eq!(value["items"][0]["pillar"], "DESTROY");
        assert_eq!(value["items"][0]["priceNum"], 42);
        assert!(value.get("toggled").is_none());
    }

    #[test]
    fn test_membership_shape() {
        let response = MembershipResponse {
            id: ProductId::from("b"),
            in_wishlist: true,
        };

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"id":"b","inWishlist":true}"#
        );
    }

    #[test]
    fn test_requires_provider() {
        let provider = CartProvider::detached();
        assert_eq!(
            is_in_wishlist(&provider, "b").unwrap_err().code,
            ErrorCode::ProviderMissing
        );
    }
}
