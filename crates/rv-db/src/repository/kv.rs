//! # Key-Value Repository
//!
//! SQL access to the `kv_entries` table.
//!
//! ```text
//! ┌──────────────┬──────────────────────────────┬────────────────────────────┐
//! │ key (PK)     │ value                        │ updated_at                 │
//! ├──────────────┼──────────────────────────────┼────────────────────────────┤
//! │ rv_cart      │ [{"id":"a",...}]             │ 2026-10-19T09:12:44Z       │
//! │ rv_wishlist  │ []                           │ 2026-10-19T09:12:40Z       │
//! └──────────────┴──────────────────────────────┴────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// A stored value together with its last write time.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct StoredEntry {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Repository for key-value operations.
#[derive(Debug, Clone)]
pub struct KeyValueRepository {
    pool: SqlitePool,
}

impl KeyValueRepository {
    /// Creates a new KeyValueRepository.
    pub fn new(pool: SqlitePool) -> Self {
        KeyValueRepository { pool }
    }

    /// Reads the value stored under `key`.
    ///
    /// ## Returns
    /// * `Ok(Some(value))` - Key present
    /// * `Ok(None)` - Key never written (or removed)
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM kv_entries WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        debug!(key = %key, found = value.is_some(), "kv get");
        Ok(value)
    }

    /// Reads the full entry, including when it was last written.
    pub async fn entry(&self, key: &str) -> DbResult<Option<StoredEntry>> {
        let entry = sqlx::query_as::<_, StoredEntry>(
            "SELECT key, value, updated_at FROM kv_entries WHERE key = ?1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO kv_entries (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        debug!(key = %key, bytes = value.len(), "kv set");
        Ok(())
    }

    /// Deletes the entry for `key`. Removing a missing key is not an error.
    pub async fn remove(&self, key: &str) -> DbResult<()> {
        sqlx::query("DELETE FROM kv_entries WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        debug!(key = %key, "kv remove");
        Ok(())
    }

    /// Lists all stored keys, sorted.
    pub async fn keys(&self) -> DbResult<Vec<String>> {
        let keys: Vec<String> = sqlx::query_scalar("SELECT key FROM kv_entries ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};

    async fn repo() -> super::KeyValueRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().kv()
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let kv = repo().await;
        assert_eq!(kv.get("rv_cart").await.unwrap(), None);
        assert_eq!(kv.entry("rv_cart").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let kv = repo().await;
        kv.set("rv_cart", r#"[{"id":"a"}]"#).await.unwrap();

        assert_eq!(
            kv.get("rv_cart").await.unwrap().as_deref(),
            Some(r#"[{"id":"a"}]"#)
        );
    }

    #[tokio::test]
    async fn test_set_overwrites_and_bumps_timestamp() {
        let kv = repo().await;
        kv.set("rv_wishlist", "[]").await.unwrap();
        let first = kv.entry("rv_wishlist").await.unwrap().unwrap();

        kv.set("rv_wishlist", r#"[{"id":"b"}]"#).await.unwrap();
        let second = kv.entry("rv_wishlist").await.unwrap().unwrap();

        assert_eq!(second.value, r#"[{"id":"b"}]"#);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(kv.keys().await.unwrap(), vec!["rv_wishlist".to_string()]);
    }

    #[tokio::test]
    async fn test_remove() {
        let kv = repo().await;
        kv.set("rv_cart", "[]").await.unwrap();
        kv.set("rv_wishlist", "[]").await.unwrap();

        kv.remove("rv_cart").await.unwrap();
        kv.remove("never-written").await.unwrap();

        assert_eq!(kv.get("rv_cart").await.unwrap(), None);
        assert_eq!(kv.keys().await.unwrap(), vec!["rv_wishlist".to_string()]);
    }
}
