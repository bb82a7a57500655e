use crate::core::errors::NobitexError;
use crate::core::kernel::cache::store::{CacheStore, CachedResponse};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;

fn cache_err(e: redis::RedisError) -> NobitexError {
    NobitexError::Cache(format!("redis: {e}"))
}

/// Remote key-value store backed by Redis.
///
/// Entries are JSON blobs under `<namespace>:<fingerprint>` keys, so several
/// clients can share one server without colliding. The cutoff purge scans the
/// namespace with `SCAN MATCH`; Redis TTLs are deliberately not used because
/// per-call expiry overrides are resolved at read time by the cache layer.
pub struct RedisStore {
    conn: redis::aio::MultiplexedConnection,
    namespace: String,
}

impl RedisStore {
    pub async fn open(url: &str, namespace: &str) -> Result<Self, NobitexError> {
        let client = redis::Client::open(url).map_err(cache_err)?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(cache_err)?;
        Ok(Self {
            conn,
            namespace: namespace.to_string(),
        })
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}:{}", self.namespace, key)
    }

    async fn scan_keys(&self) -> Result<Vec<String>, NobitexError> {
        let mut conn = self.conn.clone();
        let pattern = format!("{}:*", self.namespace);
        let mut iter = conn
            .scan_match::<_, String>(pattern)
            .await
            .map_err(cache_err)?;
        let mut keys = Vec::new();
        while let Some(key) = iter.next_item().await {
            keys.push(key);
        }
        Ok(keys)
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<CachedResponse>, NobitexError> {
        let mut conn = self.conn.clone();
        let raw: Option<Vec<u8>> = conn.get(self.namespaced(key)).await.map_err(cache_err)?;
        match raw {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, entry: CachedResponse) -> Result<(), NobitexError> {
        let mut conn = self.conn.clone();
        let raw = serde_json::to_vec(&entry)?;
        let _: () = conn
            .set(self.namespaced(key), raw)
            .await
            .map_err(cache_err)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), NobitexError> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(self.namespaced(key)).await.map_err(cache_err)?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), NobitexError> {
        let keys = self.scan_keys().await?;
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.conn.clone();
        let _: () = conn.del(keys).await.map_err(cache_err)?;
        Ok(())
    }

    async fn purge_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, NobitexError> {
        let mut purged = 0u64;
        let mut conn = self.conn.clone();
        for key in self.scan_keys().await? {
            let raw: Option<Vec<u8>> = conn.get(&key).await.map_err(cache_err)?;
            let Some(bytes) = raw else { continue };
            let entry: CachedResponse = match serde_json::from_slice(&bytes) {
                Ok(entry) => entry,
                // Foreign blob under our namespace; leave it alone.
                Err(_) => continue,
            };
            if entry.created_at <= cutoff {
                let _: () = conn.del(&key).await.map_err(cache_err)?;
                purged += 1;
            }
        }
        Ok(purged)
    }
}
