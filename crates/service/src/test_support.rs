#![cfg(test)]
use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::exchange::{CurrencyConverter, ExchangeError};
use crate::storage::Storage;

/// Backend whose fallible operations always fail; reads see nothing.
pub struct FailingStore;

#[async_trait]
impl<V: Send + 'static> Storage<V> for FailingStore {
    async fn load(&self, _key: &str) -> Option<V> { None }
    async fn exist(&self, _key: &str) -> bool { false }
    async fn save(&self, _key: String, _value: V) -> Result<(), ServiceError> {
        Err(ServiceError::Storage("disk full".into()))
    }
    async fn remove(&self, _key: &str) {}
    async fn load_all(&self) -> Result<HashMap<String, V>, ServiceError> {
        Err(ServiceError::Storage("disk full".into()))
    }
}

/// Converter with a single known target.
pub struct FixedRate {
    pub to: &'static str,
    pub rate: f64,
}

impl CurrencyConverter for FixedRate {
    fn convert_exchange_rate(&self, _from: &str, to: &str) -> Result<f64, ExchangeError> {
        if to == self.to { Ok(self.rate) } else { Err(ExchangeError::CurrencyNotFound(to.into())) }
    }
}
