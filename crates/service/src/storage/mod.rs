//! Storage abstractions for the service layer.
//!
//! `Storage<V>` is the capability both services are written against; the
//! in-memory `MemoryStore` is the only backend today. `save` and `load_all`
//! stay fallible so a durable backend can report I/O failures through the
//! same interface.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::ServiceError;

pub mod memory_store;

pub use memory_store::MemoryStore;

/// String-keyed store for values of type `V`.
///
/// Every operation is atomic with respect to every other one.
#[async_trait]
pub trait Storage<V: Send + 'static>: Send + Sync {
    /// Current value for `key`, if any.
    async fn load(&self, key: &str) -> Option<V>;
    /// Whether `key` is present, without cloning its value.
    async fn exist(&self, key: &str) -> bool;
    /// Insert or overwrite the value for `key`.
    async fn save(&self, key: String, value: V) -> Result<(), ServiceError>;
    /// Delete `key`; absent keys are a no-op.
    async fn remove(&self, key: &str);
    /// Owned point-in-time copy of every entry.
    async fn load_all(&self) -> Result<HashMap<String, V>, ServiceError>;
}
