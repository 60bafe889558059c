use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Currency every stored price is expressed in.
pub const BASE_CURRENCY: &str = "GBP";

/// Catalog record, keyed by `name`.
///
/// Fields a client omits take their defaults; `created_at` is stamped at
/// decode time when absent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub currency: String,
}

impl Product {
    /// Check name and price, then upper-case the currency label, filling the
    /// base currency when it is missing. The label is stored as given.
    pub fn normalize_and_validate(&mut self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::Validation("name is required".into()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ModelError::Validation("price must be a non-negative number".into()));
        }
        let currency = self.currency.trim().to_ascii_uppercase();
        self.currency = if currency.is_empty() { BASE_CURRENCY.to_string() } else { currency };
        Ok(())
    }

    /// Copy of this record with the price multiplied by `rate` and relabelled.
    pub fn priced_in(&self, currency: &str, rate: f64) -> Product {
        Product {
            price: self.price * rate,
            currency: currency.to_string(),
            ..self.clone()
        }
    }
}

/// Lookup body for `POST /product`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductQuery {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub currency: Option<String>,
}

impl ProductQuery {
    /// The currency to convert into, if one was asked for and it is not the base.
    pub fn target_currency(&self) -> Option<String> {
        let code = self.currency.as_deref()?.trim().to_ascii_uppercase();
        if code.is_empty() || code == BASE_CURRENCY {
            return None;
        }
        Some(code)
    }
}
