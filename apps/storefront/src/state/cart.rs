//! # Cart State
//!
//! `CartStore` owns the session's cart and wishlist and keeps the key-value
//! store in step with them.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartStore Lifecycle                                  │
//! │                                                                         │
//! │  Session start ──► CartStore::load(store)                               │
//! │                     ├── get("rv_cart")     ─► Loaded | Absent | Corrupt │
//! │                     └── get("rv_wishlist") ─► Loaded | Absent | Corrupt │
//! │                         (anything but Loaded starts empty)              │
//! │                                                                         │
//! │  Front-end Action          CartStore               Persisted Key        │
//! │  ───────────────           ─────────               ─────────────        │
//! │  Click "Add"     ────────► add_to_cart()    ─────► rv_cart              │
//! │  Click "Remove"  ────────► remove_from_cart() ───► rv_cart              │
//! │  Click "Clear"   ────────► clear_cart()     ─────► rv_cart              │
//! │  Click "♥"       ────────► toggle_wishlist() ────► rv_wishlist          │
//! │  Header badge    ────────► cart_count()     ─────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence
//! Writes are best-effort: a failed write is logged and the in-memory state
//! stays authoritative for the rest of the session. The two keys are written
//! independently.
//!
//! ## Thread Safety
//! Mutations take `&mut self`, so there is exactly one mutator at a time and
//! no lock is involved.

use std::fmt;
use std::sync::Arc;

use rv_core::snapshot::{self, LoadOutcome};
use rv_core::{Cart, CartLine, CoreResult, Product, Toggle, Wishlist, CART_KEY, WISHLIST_KEY};
use rv_db::KeyValueStore;
use tracing::{debug, warn};

/// Shared handle to whichever key-value backend the session uses.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// The session's cart and wishlist, mirrored into a key-value store.
pub struct CartStore {
    cart: Cart,
    wishlist: Wishlist,
    store: SharedStore,
}

impl CartStore {
    /// Restores the previous session's state from `store`.
    ///
    /// Never fails: absent, corrupt or unreadable values start empty.
    pub async fn load(store: SharedStore) -> Self {
        let cart = restore(store.as_ref(), CART_KEY, snapshot::decode_cart).await;
        let wishlist = restore(store.as_ref(), WISHLIST_KEY, snapshot::decode_wishlist).await;

        debug!(
            cart_lines = cart.len(),
            wishlist_entries = wishlist.count(),
            "Cart state restored"
        );

        CartStore {
            cart,
            wishlist,
            store,
        }
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// Cart lines in insertion order.
    pub fn cart(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Adds one unit of `product`, appending a line if it is new.
    ///
    /// Returns the line's quantity after the call.
    pub async fn add_to_cart(&mut self, product: &Product) -> u32 {
        let quantity = self.cart.add(product);
        debug!(product_id = %product.id, quantity, "Added to cart");

        self.persist_cart().await;
        quantity
    }

    /// Removes the line for `id`. Unknown IDs change nothing.
    pub async fn remove_from_cart(&mut self, id: &str) {
        if !self.cart.remove(id) {
            debug!(product_id = %id, "Remove ignored, not in cart");
            return;
        }

        debug!(product_id = %id, "Removed from cart");
        self.persist_cart().await;
    }

    /// Empties the cart.
    pub async fn clear_cart(&mut self) {
        if self.cart.clear() {
            debug!("Cart cleared");
            self.persist_cart().await;
        }
    }

    /// Total units in the cart, recomputed on every call.
    pub fn cart_count(&self) -> u64 {
        self.cart.count()
    }

    // -------------------------------------------------------------------------
    // Wishlist
    // -------------------------------------------------------------------------

    /// Wishlist entries in insertion order.
    pub fn wishlist(&self) -> &[Product] {
        self.wishlist.entries()
    }

    /// Saves `product` if it isn't saved, un-saves it otherwise.
    pub async fn toggle_wishlist(&mut self, product: Product) -> Toggle {
        let product_id = product.id.clone();
        let toggle = self.wishlist.toggle(product);
        debug!(product_id = %product_id, ?toggle, "Wishlist toggled");

        self.persist_wishlist().await;
        toggle
    }

    pub fn is_in_wishlist(&self, id: &str) -> bool {
        self.wishlist.contains(id)
    }

    pub fn wishlist_count(&self) -> usize {
        self.wishlist.count()
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    async fn persist_cart(&self) {
        self.persist(CART_KEY, snapshot::encode_cart(&self.cart))
            .await;
    }

    async fn persist_wishlist(&self) {
        self.persist(WISHLIST_KEY, snapshot::encode_wishlist(&self.wishlist))
            .await;
    }

    async fn persist(&self, key: &'static str, encoded: CoreResult<String>) {
        let raw = match encoded {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key, error = %err, "Skipping persist, state could not be encoded");
                return;
            }
        };

        if let Err(err) = self.store.set(key, &raw).await {
            warn!(key, error = %err, "Persist failed, keeping in-memory state");
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("wishlist", &self.wishlist)
            .finish_non_exhaustive()
    }
}

/// Reads and decodes one key, applying the empty-on-failure policy.
async fn restore<T: Default>(
    store: &dyn KeyValueStore,
    key: &'static str,
    decode: fn(Option<&str>) -> LoadOutcome<T>,
) -> T {
    let outcome = match store.get(key).await {
        Ok(raw) => decode(raw.as_deref()),
        Err(err) => LoadOutcome::Unavailable(err.to_string()),
    };

    match &outcome {
        LoadOutcome::Loaded(_) => debug!(key, "Restored persisted value"),
        LoadOutcome::Absent => debug!(key, "Nothing persisted, starting empty"),
        LoadOutcome::Corrupt(reason) => {
            warn!(key, %reason, "Persisted value unreadable, starting empty")
        }
        LoadOutcome::Unavailable(reason) => {
            warn!(key, %reason, "Store unavailable, starting empty")
        }
    }

    outcome.into_loaded_or_default()
}
