use crate::core::errors::NobitexError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One cached HTTP exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedResponse {
    pub status: u16,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl CachedResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            created_at: Utc::now(),
        }
    }
}

/// Storage strategy behind the cache layer.
///
/// Resolved once from a [`CacheBackend`](super::CacheBackend) at enable time.
/// Expiry is not a store concern: stores keep whatever they are given and the
/// layer decides freshness at read time. `purge_older_than` is an O(n) scan
/// over all entries; none of the shipped backends index on creation time.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<CachedResponse>, NobitexError>;

    async fn put(&self, key: &str, entry: CachedResponse) -> Result<(), NobitexError>;

    async fn delete(&self, key: &str) -> Result<(), NobitexError>;

    /// Remove every entry.
    async fn clear(&self) -> Result<(), NobitexError>;

    /// Remove entries created at or before `cutoff`; returns how many.
    async fn purge_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, NobitexError>;
}
