//! # Key-Value Store
//!
//! The string-keyed store the cart and wishlist are mirrored into.
//!
//! ## Implementations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       dyn KeyValueStore                                 │
//! │                                                                         │
//! │   ┌──────────────────────┐          ┌──────────────────────────────┐   │
//! │   │   MemoryStore        │          │   Database (SQLite)          │   │
//! │   │   HashMap in a Mutex │          │   kv_entries table           │   │
//! │   │   tests, --memory    │          │   survives restarts          │   │
//! │   └──────────────────────┘          └──────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Values are opaque strings here; what they mean is rv-core's business.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::DbResult;
use crate::pool::Database;

/// A persistent string key-value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value under `key`; `None` when nothing was stored.
    async fn get(&self, key: &str) -> DbResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> DbResult<()>;

    /// Deletes `key`. Deleting a missing key succeeds.
    async fn remove(&self, key: &str) -> DbResult<()>;
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    async fn get(&self, key: &str) -> DbResult<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> DbResult<()> {
        (**self).remove(key).await
    }
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// Process-local store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Creates a store pre-populated with the given entries.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        MemoryStore {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> DbResult<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> DbResult<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

// =============================================================================
// SQLite Store
// =============================================================================

#[async_trait]
impl KeyValueStore for Database {
    async fn get(&self, key: &str) -> DbResult<Option<String>> {
        self.kv().get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        self.kv().set(key, value).await
    }

    async fn remove(&self, key: &str) -> DbResult<()> {
        self.kv().remove(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;

    async fn exercise(store: &dyn KeyValueStore) {
        assert_eq!(store.get("rv_cart").await.unwrap(), None);

        store.set("rv_cart", "[]").await.unwrap();
        store.set("rv_cart", r#"[{"id":"a"}]"#).await.unwrap();
        assert_eq!(
            store.get("rv_cart").await.unwrap().as_deref(),
            Some(r#"[{"id":"a"}]"#)
        );

        store.remove("rv_cart").await.unwrap();
        store.remove("rv_cart").await.unwrap();
        assert_eq!(store.get("rv_cart").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_contract() {
        exercise(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn test_database_store_contract() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        exercise(&db).await;
    }

    #[tokio::test]
    async fn test_shared_handle_sees_same_entries() {
        let store = Arc::new(MemoryStore::with_entries([("rv_wishlist", "[]")]));
        let shared: Arc<dyn KeyValueStore> = store.clone();

        shared.set("rv_cart", "[]").await.unwrap();

        assert_eq!(store.len().await, 2);
        assert_eq!(store.get("rv_wishlist").await.unwrap().as_deref(), Some("[]"));
    }
}
