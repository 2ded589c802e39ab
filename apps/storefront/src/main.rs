//! # rv Storefront Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        rv-storefront                                    │
//! │                                                                         │
//! │  main.rs ────► Starts the tokio runtime                                 │
//! │  lib.rs ─────► Parses arguments, loads config, dispatches commands      │
//! │  state/ ─────► CartProvider(CartStore), ConfigState                     │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         SQLite Database                          │  │
//! │  │  rv-storefront.db (kv_entries: rv_cart, rv_wishlist)             │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    rv_storefront_lib::run().await
}
