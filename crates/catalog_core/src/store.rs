//! crates/catalog_core/src/store.rs
//!
//! The typed JSON layer over a `KeyValueStore`. Storage failures never reach
//! callers: they are logged and masked behind the caller's default value.

use crate::ports::{KeyValueStore, PortError, PortResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error};

//=========================================================================================
// JsonStore
//=========================================================================================

/// Reads and writes JSON values under string keys.
///
/// A detached store has no backend (e.g. while rendering without a profile):
/// reads return the supplied default and writes are dropped.
#[derive(Clone)]
pub struct JsonStore {
    backend: Option<Arc<dyn KeyValueStore>>,
}

impl JsonStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn detached() -> Self {
        Self { backend: None }
    }

    /// Returns the value under `key`, seeding `default` when the key is absent.
    pub async fn read<T>(&self, key: &str, default: T) -> T
    where
        T: Serialize + DeserializeOwned,
    {
        let Some(backend) = &self.backend else {
            return default;
        };

        match backend.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    error!("Failed to parse stored value for key \"{}\": {}", key, e);
                    default
                }
            },
            Ok(None) => {
                debug!("Seeding key \"{}\" with its default value", key);
                self.write(key, &default).await;
                default
            }
            Err(e) => {
                error!("Failed to read key \"{}\": {}", key, e);
                default
            }
        }
    }

    /// Returns the value under `key` without seeding. Missing or unreadable
    /// values both come back as `None`.
    pub async fn read_optional<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let backend = self.backend.as_ref()?;
        match backend.get(key).await {
            Ok(Some(raw)) => serde_json::from_str(&raw)
                .map_err(|e| error!("Failed to parse stored value for key \"{}\": {}", key, e))
                .ok(),
            Ok(None) => None,
            Err(e) => {
                error!("Failed to read key \"{}\": {}", key, e);
                None
            }
        }
    }

    /// Serializes `value` under `key`, overwriting any prior value.
    pub async fn write<T>(&self, key: &str, value: &T)
    where
        T: Serialize + ?Sized,
    {
        if self.backend.is_none() {
            return;
        }
        if let Err(e) = self.try_write(key, value).await {
            error!("Failed to write key \"{}\": {}", key, e);
        }
    }

    /// Like `write`, but reports the failure. A detached store cannot hold the
    /// value, so writing to it is an error here.
    pub async fn try_write<T>(&self, key: &str, value: &T) -> PortResult<()>
    where
        T: Serialize + ?Sized,
    {
        let backend = self
            .backend
            .as_ref()
            .ok_or_else(|| PortError::Unexpected(format!("No storage attached for key \"{}\"", key)))?;
        let raw = serde_json::to_string(value).map_err(|e| {
            PortError::Unexpected(format!("Failed to serialize value for key \"{}\": {}", key, e))
        })?;
        backend.set(key, raw).await
    }

    pub async fn remove(&self, key: &str) {
        let Some(backend) = &self.backend else {
            return;
        };
        if let Err(e) = backend.remove(key).await {
            error!("Failed to remove key \"{}\": {}", key, e);
        }
    }

    /// Writes every entry of the batch atomically. A batch with an entry that
    /// failed to serialize is dropped as a whole.
    pub async fn commit(&self, batch: Batch) {
        let Some(backend) = &self.backend else {
            return;
        };

        if let Some(key) = batch.failed_key {
            error!("Dropping batch write: value for key \"{}\" did not serialize", key);
            return;
        }

        let keys: Vec<String> = batch.entries.iter().map(|(k, _)| k.clone()).collect();
        if let Err(e) = backend.write_batch(batch.entries).await {
            error!("Failed to write keys {:?} as one batch: {}", keys, e);
        }
    }
}

/// A set of writes committed together through `JsonStore::commit`.
#[derive(Debug, Default)]
pub struct Batch {
    entries: Vec<(String, String)>,
    failed_key: Option<String>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put<T>(mut self, key: &str, value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_string(value) {
            Ok(raw) => self.entries.push((key.to_string(), raw)),
            Err(_) => {
                self.failed_key.get_or_insert_with(|| key.to_string());
            }
        }
        self
    }
}

//=========================================================================================
// MemoryStore
//=========================================================================================

/// A process-local `KeyValueStore`, used for tests and single-process setups.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw snapshot of one key, bypassing JSON decoding.
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> PortResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> PortResult<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> PortResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn write_batch(&self, entries: Vec<(String, String)>) -> PortResult<()> {
        let mut guard = self.entries.write().await;
        guard.extend(entries);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A backend whose every call fails.
    struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get(&self, _key: &str) -> PortResult<Option<String>> {
            Err(PortError::Unexpected("disk unavailable".to_string()))
        }
        async fn set(&self, _key: &str, _value: String) -> PortResult<()> {
            Err(PortError::Unexpected("disk unavailable".to_string()))
        }
        async fn remove(&self, _key: &str) -> PortResult<()> {
            Err(PortError::Unexpected("disk unavailable".to_string()))
        }
        async fn write_batch(&self, _entries: Vec<(String, String)>) -> PortResult<()> {
            Err(PortError::Unexpected("disk unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn read_seeds_missing_key_with_default() {
        let backend = Arc::new(MemoryStore::new());
        let store = JsonStore::new(backend.clone());

        let value: Vec<String> = store.read("names", vec!["a".to_string()]).await;

        assert_eq!(value, vec!["a".to_string()]);
        assert_eq!(backend.raw("names").await.as_deref(), Some(r#"["a"]"#));
    }

    #[tokio::test]
    async fn read_returns_stored_value_over_default() {
        let backend = Arc::new(MemoryStore::new());
        backend.set("count", "7".to_string()).await.unwrap();
        let store = JsonStore::new(backend);

        assert_eq!(store.read("count", 0u32).await, 7);
    }

    #[tokio::test]
    async fn unparseable_value_is_masked_and_left_in_place() {
        let backend = Arc::new(MemoryStore::new());
        backend.set("count", "{not json".to_string()).await.unwrap();
        let store = JsonStore::new(backend.clone());

        assert_eq!(store.read("count", 3u32).await, 3);
        assert_eq!(backend.raw("count").await.as_deref(), Some("{not json"));
    }

    #[tokio::test]
    async fn backend_failures_fall_back_to_default() {
        let store = JsonStore::new(Arc::new(BrokenStore));

        assert_eq!(store.read("count", 5u32).await, 5);
        assert_eq!(store.read_optional::<u32>("count").await, None);
        store.write("count", &1u32).await;
        store.commit(Batch::new().put("count", &1u32)).await;
    }

    #[tokio::test]
    async fn try_write_reports_backend_failures() {
        let broken = JsonStore::new(Arc::new(BrokenStore));
        let err = broken.try_write("count", &1u32).await.unwrap_err();
        assert!(matches!(err, PortError::Unexpected(_)));

        let backend = Arc::new(MemoryStore::new());
        let store = JsonStore::new(backend.clone());
        store.try_write("count", &2u32).await.unwrap();
        assert_eq!(backend.raw("count").await.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn detached_store_never_touches_storage() {
        let store = JsonStore::detached();

        assert_eq!(store.read("count", 9u32).await, 9);
        store.write("count", &1u32).await;
        assert_eq!(store.read_optional::<u32>("count").await, None);
        assert!(store.try_write("count", &1u32).await.is_err());
    }

    #[tokio::test]
    async fn commit_writes_all_entries() {
        let backend = Arc::new(MemoryStore::new());
        let store = JsonStore::new(backend.clone());

        store
            .commit(Batch::new().put("a", &1u32).put("b", &"two"))
            .await;

        assert_eq!(backend.raw("a").await.as_deref(), Some("1"));
        assert_eq!(backend.raw("b").await.as_deref(), Some("\"two\""));
    }
}
