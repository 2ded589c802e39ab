//! # rv-db: Persistence Layer for the rv storefront
//!
//! This crate provides the string key-value store that mirrors the cart and
//! wishlist between sessions. The default backend is SQLite (via sqlx); an
//! in-memory backend serves tests and throwaway sessions.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      rv storefront Data Flow                            │
//! │                                                                         │
//! │  CartStore mutation (add_to_cart)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     rv-db (THIS CRATE)                          │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ KeyValueStore │    │  Repository   │    │  Migrations  │  │   │
//! │  │   │  (store.rs)   │───►│   (kv.rs)     │    │  (embedded)  │  │   │
//! │  │   │ MemoryStore   │    │ kv_entries    │    │ 001_kv.sql   │  │   │
//! │  │   │ Database      │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │       SQLite Database (platform data dir)/rv-storefront.db      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `KeyValueStore` trait and its backends
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`repository`] - SQL for the `kv_entries` table
//! - [`error`] - Database error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rv_db::{Database, DbConfig, KeyValueStore};
//!
//! let db = Database::new(DbConfig::new("path/to/rv-storefront.db")).await?;
//! db.set("rv_cart", "[]").await?;
//! let raw = db.get("rv_cart").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::kv::{KeyValueRepository, StoredEntry};
pub use store::{KeyValueStore, MemoryStore};
