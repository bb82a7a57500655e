use crate::core::errors::NobitexError;
use crate::core::kernel::cache::store::{CacheStore, CachedResponse};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// On-disk store: one JSON file holding the whole key/entry map.
///
/// The map is kept in memory and flushed on every mutation with a
/// write-then-rename, so a crash mid-flush leaves the previous file intact.
/// Multi-process access is not coordinated beyond that atomicity.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, CachedResponse>>,
}

impl FileStore {
    /// Open or create the cache file at `path`.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, NobitexError> {
        let path = path.into();
        let entries = match tokio::fs::read(&path).await {
            Ok(raw) => serde_json::from_slice(&raw)
                .map_err(|e| NobitexError::Cache(format!("corrupt cache file {}: {e}", path.display())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(NobitexError::Cache(format!(
                    "cannot read cache file {}: {e}",
                    path.display()
                )))
            }
        };
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    async fn flush(&self, entries: &HashMap<String, CachedResponse>) -> Result<(), NobitexError> {
        let raw = serde_json::to_vec(entries)?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &raw)
            .await
            .map_err(|e| NobitexError::Cache(format!("cannot write {}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| NobitexError::Cache(format!("cannot replace {}: {e}", self.path.display())))
    }
}

#[async_trait]
impl CacheStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<CachedResponse>, NobitexError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, entry: CachedResponse) -> Result<(), NobitexError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), entry);
        self.flush(&entries).await
    }

    async fn delete(&self, key: &str) -> Result<(), NobitexError> {
        let mut entries = self.entries.write().await;
        if entries.remove(key).is_some() {
            self.flush(&entries).await?;
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), NobitexError> {
        let mut entries = self.entries.write().await;
        entries.clear();
        self.flush(&entries).await
    }

    async fn purge_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, NobitexError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.created_at > cutoff);
        let purged = (before - entries.len()) as u64;
        if purged > 0 {
            self.flush(&entries).await?;
        }
        Ok(purged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nobitex-cache.json");

        {
            let store = FileStore::open(&path).await.unwrap();
            store
                .put("k1", CachedResponse::new(200, r#"{"a":1}"#))
                .await
                .unwrap();
        }

        let reopened = FileStore::open(&path).await.unwrap();
        let hit = reopened.get("k1").await.unwrap().unwrap();
        assert_eq!(hit.status, 200);
        assert_eq!(hit.body, r#"{"a":1}"#);
    }

    #[tokio::test]
    async fn clear_empties_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");

        let store = FileStore::open(&path).await.unwrap();
        store.put("k1", CachedResponse::new(200, "{}")).await.unwrap();
        store.clear().await.unwrap();

        let reopened = FileStore::open(&path).await.unwrap();
        assert!(reopened.get("k1").await.unwrap().is_none());
    }
}
