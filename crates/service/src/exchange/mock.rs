use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{CurrencyConverter, ExchangeError};

// Static stand-in for a live exchange-rate API, keyed by base currency.
static RATES: Lazy<HashMap<&'static str, HashMap<&'static str, f64>>> = Lazy::new(|| {
    let gbp = HashMap::from([
        ("EUR", 1.19),
        ("USD", 1.21),
        ("CAD", 1.56),
        ("SEK", 12.46),
        ("JPY", 160.55),
    ]);
    HashMap::from([("GBP", gbp)])
});

/// Converter backed by a fixed rate table. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockExchange;

impl MockExchange {
    pub fn new() -> Self {
        Self
    }

    /// Rate table for `base`, codes compared case-insensitively.
    pub fn rates_for(&self, base: &str) -> Result<&'static HashMap<&'static str, f64>, ExchangeError> {
        RATES
            .get(base.to_ascii_uppercase().as_str())
            .ok_or_else(|| ExchangeError::UnsupportedBase(base.to_string()))
    }
}

impl CurrencyConverter for MockExchange {
    fn convert_exchange_rate(&self, from: &str, to: &str) -> Result<f64, ExchangeError> {
        let rates = self.rates_for(from)?;
        rates
            .get(to.to_ascii_uppercase().as_str())
            .copied()
            .ok_or_else(|| ExchangeError::CurrencyNotFound(to.to_string()))
    }
}
