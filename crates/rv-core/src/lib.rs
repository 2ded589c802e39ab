//! # rv-core: Pure Cart & Wishlist Logic
//!
//! This crate is the **heart** of the rv storefront. It contains the cart and
//! wishlist rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      rv storefront Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │             Front-end (catalog, cart page, wishlist)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        storefront commands  →  CartStore (state + persist)      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 ★ rv-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │ wishlist  │  │ snapshot  │  │   │
//! │  │   │  Product  │  │   Cart    │  │ Wishlist  │  │ encode/   │  │   │
//! │  │   │ CartLine  │  │  count()  │  │  toggle() │  │ decode    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO LOGGING • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 rv-db (key-value persistence)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product payloads and cart lines
//! - [`cart`] - The cart collection
//! - [`wishlist`] - The wishlist collection
//! - [`snapshot`] - Persisted layout and load outcomes
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use rv_core::{Cart, Product};
//!
//! let widget = Product::new("a")
//!     .with("name", "Widget")
//!     .with("price", 10)
//!     .with("image", "x");
//!
//! let mut cart = Cart::new();
//! cart.add(&widget);
//! cart.add(&widget);
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.count(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod snapshot;
pub mod types;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use error::{CoreError, CoreResult};
pub use snapshot::{LoadOutcome, CART_KEY, WISHLIST_KEY};
pub use types::*;
pub use wishlist::{Toggle, Wishlist};
