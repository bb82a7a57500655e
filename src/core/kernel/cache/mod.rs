//! Response caching with pluggable backends and time-based expiry.
//!
//! The cache interposes between the dispatcher and the transport: a
//! cache-eligible request is fingerprinted, looked up, and on a fresh hit the
//! stored response is replayed without a network exchange. Backends are a
//! tagged enum resolved once, at enable time, into a [`CacheStore`] strategy.

pub mod file;
pub mod memory;
#[cfg(feature = "redis-cache")]
pub mod redis;
pub mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
#[cfg(feature = "redis-cache")]
pub use redis::RedisStore;
pub use store::{CacheStore, CachedResponse};

use crate::core::config::ConfigError;
use crate::core::errors::NobitexError;
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Where cached responses live.
#[derive(Clone)]
pub enum CacheBackend {
    /// In-process map, dropped with the client.
    Memory,
    /// Single JSON file on disk.
    File { path: PathBuf },
    /// Remote Redis server; the URL must be non-empty.
    #[cfg(feature = "redis-cache")]
    Redis { url: String },
    /// Any user-supplied store (remote key-value servers, test doubles).
    Custom(Arc<dyn CacheStore>),
}

impl std::fmt::Debug for CacheBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => f.write_str("Memory"),
            Self::File { path } => f.debug_struct("File").field("path", path).finish(),
            #[cfg(feature = "redis-cache")]
            Self::Redis { url } => f.debug_struct("Redis").field("url", url).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Cache configuration handed to `enable_cache`.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub backend: CacheBackend,
    /// Global expiry; `None` means entries never expire.
    pub expire_after: Option<Duration>,
    /// Key prefix for shared backends.
    pub namespace: String,
}

impl CacheConfig {
    pub fn new(backend: CacheBackend) -> Self {
        Self {
            backend,
            expire_after: None,
            namespace: "nobitex-cache".to_string(),
        }
    }

    #[must_use]
    pub const fn expire_after(mut self, expire_after: Duration) -> Self {
        self.expire_after = Some(expire_after);
        self
    }

    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}

/// Per-call cache opt-in, layered on the per-client enable.
#[derive(Debug, Clone, Copy, Default)]
pub enum CacheMode {
    /// Never touch the cache for this call.
    #[default]
    Bypass,
    /// Use the cache if enabled; `expire_after` overrides the global expiry
    /// for this call only.
    Use { expire_after: Option<Duration> },
}

impl CacheMode {
    pub const fn cached() -> Self {
        Self::Use { expire_after: None }
    }
}

/// The caching transport side: resolved store plus expiry policy.
pub struct CacheLayer {
    store: Arc<dyn CacheStore>,
    default_expiry: Option<Duration>,
}

impl CacheLayer {
    /// Resolve the configured backend into a live store.
    ///
    /// Fails with a configuration error before any I/O when a remote backend
    /// is selected without a connection URL.
    pub async fn resolve(config: CacheConfig) -> Result<Self, NobitexError> {
        let store: Arc<dyn CacheStore> = match config.backend {
            CacheBackend::Memory => Arc::new(MemoryStore::new()),
            CacheBackend::File { path } => Arc::new(FileStore::open(path).await?),
            #[cfg(feature = "redis-cache")]
            CacheBackend::Redis { url } => {
                if url.is_empty() {
                    return Err(ConfigError::InvalidConfiguration(
                        "redis cache backend requires a connection URL".to_string(),
                    )
                    .into());
                }
                Arc::new(RedisStore::open(&url, &config.namespace).await?)
            }
            CacheBackend::Custom(store) => store,
        };
        Ok(Self {
            store,
            default_expiry: config.expire_after,
        })
    }

    /// Deterministic fingerprint of (method, URL, query, body).
    pub fn fingerprint(
        method: &str,
        url: &str,
        query: &[(String, String)],
        body: Option<&serde_json::Value>,
    ) -> String {
        let mut hasher = Sha256::new();
        hasher.update(method.as_bytes());
        hasher.update(b"\n");
        hasher.update(url.as_bytes());
        hasher.update(b"\n");
        for (k, v) in query {
            hasher.update(k.as_bytes());
            hasher.update(b"=");
            hasher.update(v.as_bytes());
            hasher.update(b"&");
        }
        hasher.update(b"\n");
        if let Some(body) = body {
            hasher.update(body.to_string().as_bytes());
        }
        hex::encode(hasher.finalize())
    }

    /// Fresh entry for `key`, if any. Stale entries count as misses and are
    /// left in place to be overwritten by the next store.
    pub async fn lookup(
        &self,
        key: &str,
        expire_override: Option<Duration>,
    ) -> Result<Option<CachedResponse>, NobitexError> {
        let Some(entry) = self.store.get(key).await? else {
            return Ok(None);
        };
        let expiry = expire_override.or(self.default_expiry);
        let fresh = match expiry {
            None => true,
            Some(expiry) => {
                let max_age = chrono::Duration::from_std(expiry)
                    .unwrap_or_else(|_| chrono::Duration::max_value());
                Utc::now() - entry.created_at < max_age
            }
        };
        Ok(fresh.then_some(entry))
    }

    /// Store a response. Only `2xx` exchanges are kept; replaying a cached
    /// rejection would keep raising it after the condition clears.
    pub async fn store(&self, key: &str, status: u16, body: &str) -> Result<(), NobitexError> {
        if (200..300).contains(&status) {
            self.store.put(key, CachedResponse::new(status, body)).await?;
        }
        Ok(())
    }

    /// Purge everything, or only entries older than `older_than`.
    pub async fn clear(&self, older_than: Option<Duration>) -> Result<(), NobitexError> {
        match older_than {
            None => self.store.clear().await,
            Some(age) => {
                let cutoff = Utc::now()
                    - chrono::Duration::from_std(age)
                        .unwrap_or_else(|_| chrono::Duration::max_value());
                self.store.purge_older_than(cutoff).await.map(|_| ())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fingerprint_is_deterministic_and_sensitive() {
        let query = vec![("symbol".to_string(), "BTCIRT".to_string())];
        let body = json!({"a": 1});

        let a = CacheLayer::fingerprint("GET", "https://x/v2/depth", &query, Some(&body));
        let b = CacheLayer::fingerprint("GET", "https://x/v2/depth", &query, Some(&body));
        assert_eq!(a, b);

        let c = CacheLayer::fingerprint("POST", "https://x/v2/depth", &query, Some(&body));
        assert_ne!(a, c);
        let d = CacheLayer::fingerprint("GET", "https://x/v2/depth", &[], Some(&body));
        assert_ne!(a, d);
    }

    #[tokio::test]
    async fn stale_entries_are_misses() {
        let layer = CacheLayer::resolve(
            CacheConfig::new(CacheBackend::Memory).expire_after(Duration::from_secs(3600)),
        )
        .await
        .unwrap();

        layer.store("k", 200, "{}").await.unwrap();
        assert!(layer.lookup("k", None).await.unwrap().is_some());
        // A per-call zero expiry makes any entry stale.
        assert!(layer
            .lookup("k", Some(Duration::from_secs(0)))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn non_success_responses_are_not_stored() {
        let layer = CacheLayer::resolve(CacheConfig::new(CacheBackend::Memory))
            .await
            .unwrap();
        layer.store("k", 404, r#"{"detail":"nope"}"#).await.unwrap();
        assert!(layer.lookup("k", None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_with_zero_age_purges_everything() {
        let layer = CacheLayer::resolve(CacheConfig::new(CacheBackend::Memory))
            .await
            .unwrap();
        layer.store("k", 200, "{}").await.unwrap();
        layer.clear(Some(Duration::from_secs(0))).await.unwrap();
        assert!(layer.lookup("k", None).await.unwrap().is_none());
    }
}
