//! Content Store — the single persisted cache entry holding serialized portfolio content.
//!
//! Backends are swapped at startup: `RedisStore` when `REDIS_URL` is set,
//! `MemoryStore` otherwise. `AppState` carries an `Arc<dyn ContentStore>`.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

pub mod redis_store;

pub use redis_store::RedisStore;

/// Key under which the serialized `PortfolioContent` is stored.
pub const CACHE_KEY: &str = "portfolioContent";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Minimal key-value contract the resolver depends on.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    #[cfg(test)]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_get_absent() {
        let store = MemoryStore::new();
        assert_eq!(store.get(CACHE_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_set_then_get() {
        let store = MemoryStore::new();
        store.set(CACHE_KEY, "{\"a\":1}").await.unwrap();
        assert_eq!(
            store.get(CACHE_KEY).await.unwrap().as_deref(),
            Some("{\"a\":1}")
        );
    }

    #[tokio::test]
    async fn test_memory_store_set_overwrites() {
        let store = MemoryStore::with_entry(CACHE_KEY, "old");
        store.set(CACHE_KEY, "new").await.unwrap();
        assert_eq!(store.get(CACHE_KEY).await.unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_memory_store_delete_removes_entry() {
        let store = MemoryStore::with_entry(CACHE_KEY, "value");
        store.delete(CACHE_KEY).await.unwrap();
        assert_eq!(store.get(CACHE_KEY).await.unwrap(), None);
        // Deleting again is not an error.
        store.delete(CACHE_KEY).await.unwrap();
    }
}
