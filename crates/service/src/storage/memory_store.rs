use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::storage::Storage;

/// Generic in-memory key-value map store.
///
/// A single `RwLock` guards the map: reads share it, writes take it
/// exclusively, and the guard is never held across another await. Clones
/// share the same underlying map. Nothing survives a restart.
#[derive(Clone)]
pub struct MemoryStore<V> {
    inner: Arc<RwLock<HashMap<String, V>>>,
}

impl<V> MemoryStore<V> {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// Number of live keys.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

impl<V> Default for MemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<V> Storage<V> for MemoryStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    async fn load(&self, key: &str) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    async fn exist(&self, key: &str) -> bool {
        let map = self.inner.read().await;
        map.contains_key(key)
    }

    async fn save(&self, key: String, value: V) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        map.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: &str) {
        let mut map = self.inner.write().await;
        map.remove(key);
    }

    async fn load_all(&self) -> Result<HashMap<String, V>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.clone())
    }
}
