//! # Repository Module
//!
//! Database repository implementations for the rv storefront.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartStore                                                              │
//! │       │                                                                 │
//! │       │  store.set("rv_cart", json)                                     │
//! │       ▼                                                                 │
//! │  KeyValueStore for Database                                             │
//! │       │                                                                 │
//! │       │  db.kv().set(key, value)                                        │
//! │       ▼                                                                 │
//! │  KeyValueRepository                                                     │
//! │  ├── get(&self, key)                                                    │
//! │  ├── set(&self, key, value)                                             │
//! │  ├── remove(&self, key)                                                 │
//! │  └── keys(&self)                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite (kv_entries)                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod kv;
