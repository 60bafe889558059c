//! Currency conversion collaborator used on product reads.

use thiserror::Error;

pub mod mock;

pub use mock::MockExchange;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExchangeError {
    #[error("data unavailable for base currency {0}")]
    UnsupportedBase(String),
    #[error("currency not found for {0}")]
    CurrencyNotFound(String),
}

/// Source of exchange rates; `converted = original * rate`.
pub trait CurrencyConverter: Send + Sync {
    fn convert_exchange_rate(&self, from: &str, to: &str) -> Result<f64, ExchangeError>;
}
