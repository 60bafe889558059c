use std::sync::Arc;

use models::entry::{validate_field, Entry};
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use crate::storage::Storage;

/// Business rules for loose string entries: validate at the boundary, then
/// delegate to the store.
#[derive(Clone)]
pub struct KeyValueService {
    store: Arc<dyn Storage<String>>,
}

impl KeyValueService {
    pub fn new(store: Arc<dyn Storage<String>>) -> Self { Self { store } }

    #[instrument(skip(self))]
    pub async fn get(&self, name: &str) -> Result<String, ServiceError> {
        validate_field("name", name)?;
        self.store
            .load(name)
            .await
            .ok_or_else(|| ServiceError::NotFound(format!("key {name} not found")))
    }

    /// Upsert; the last successful write wins.
    #[instrument(skip(self, entry), fields(name = %entry.name))]
    pub async fn set(&self, entry: Entry) -> Result<Entry, ServiceError> {
        entry.validate()?;
        self.store.save(entry.name.clone(), entry.value.clone()).await?;
        debug!("entry saved");
        Ok(entry)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, name: &str) -> Result<(), ServiceError> {
        validate_field("name", name)?;
        if !self.store.exist(name).await {
            return Err(ServiceError::NotFound(format!("key {name} not found")));
        }
        self.store.remove(name).await;
        debug!("entry removed");
        Ok(())
    }
}
