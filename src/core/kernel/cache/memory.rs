use crate::core::errors::NobitexError;
use crate::core::kernel::cache::store::{CacheStore, CachedResponse};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process store. Entries live as long as the client does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, CachedResponse>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<CachedResponse>, NobitexError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, entry: CachedResponse) -> Result<(), NobitexError> {
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), NobitexError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), NobitexError> {
        self.entries.write().await.clear();
        Ok(())
    }

    async fn purge_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, NobitexError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.created_at > cutoff);
        Ok((before - entries.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn round_trip_and_delete() {
        let store = MemoryStore::new();
        store
            .put("k1", CachedResponse::new(200, r#"{"status":"ok"}"#))
            .await
            .unwrap();

        let hit = store.get("k1").await.unwrap().unwrap();
        assert_eq!(hit.status, 200);
        assert_eq!(hit.body, r#"{"status":"ok"}"#);

        store.delete("k1").await.unwrap();
        assert!(store.get("k1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn purge_respects_cutoff() {
        let store = MemoryStore::new();
        let mut old = CachedResponse::new(200, "{}");
        old.created_at = Utc::now() - Duration::hours(2);
        store.put("old", old).await.unwrap();
        store.put("fresh", CachedResponse::new(200, "{}")).await.unwrap();

        let purged = store
            .purge_older_than(Utc::now() - Duration::hours(1))
            .await
            .unwrap();
        assert_eq!(purged, 1);
        assert!(store.get("old").await.unwrap().is_none());
        assert!(store.get("fresh").await.unwrap().is_some());
    }
}
