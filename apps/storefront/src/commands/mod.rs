//! # Commands Module
//!
//! Every operation a storefront front end can ask of the cart state.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── cart.rs      ◄─── get_cart, add_to_cart, remove_from_cart, clear_cart
//! ├── wishlist.rs  ◄─── get_wishlist, toggle_wishlist, is_in_wishlist
//! └── config.rs    ◄─── get_config
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  rv-storefront cart add '{"id":"a","name":"Widget","priceNum":10}'      │
//! │         │                                                               │
//! │         │ (clap parse, product JSON decoded)                            │
//! │         ▼                                                               │
//! │  commands::cart::add_to_cart(                                           │
//! │      &mut state.cart,     ◄── CartProvider, must be mounted             │
//! │      product,             ◄── From the command line                     │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  stdout: { "items": [...], "cartCount": 1 }                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs: the provider for cart and
//! wishlist commands, the configuration for `get_config`.

pub mod cart;
pub mod config;
pub mod wishlist;
