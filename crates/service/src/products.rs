use std::{collections::HashMap, sync::Arc};

use models::product::{Product, ProductQuery, BASE_CURRENCY};
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::exchange::CurrencyConverter;
use crate::storage::Storage;

/// Application service for the product catalog.
///
/// Name uniqueness is enforced here: creates are serialized so the
/// existence check and the save cannot interleave with another create.
/// Reads may convert the price into another currency; the stored record is
/// never touched by a conversion.
pub struct ProductService {
    store: Arc<dyn Storage<Product>>,
    converter: Arc<dyn CurrencyConverter>,
    create_lock: Mutex<()>,
}

impl ProductService {
    pub fn new(store: Arc<dyn Storage<Product>>, converter: Arc<dyn CurrencyConverter>) -> Self {
        Self { store, converter, create_lock: Mutex::new(()) }
    }

    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create(&self, mut product: Product) -> Result<Product, ServiceError> {
        product.normalize_and_validate()?;

        let _guard = self.create_lock.lock().await;
        if self.store.exist(&product.name).await {
            return Err(ServiceError::AlreadyExists(format!("product {} already exists", product.name)));
        }
        self.store.save(product.name.clone(), product.clone()).await?;
        info!(price = product.price, "product created");
        Ok(product)
    }

    pub async fn list(&self) -> Result<HashMap<String, Product>, ServiceError> {
        self.store.load_all().await
    }

    #[instrument(skip(self), fields(name = %query.name))]
    pub async fn get(&self, query: &ProductQuery) -> Result<Product, ServiceError> {
        let missing = || ServiceError::NotFound(format!("missing product with name {}", query.name));
        if !self.store.exist(&query.name).await {
            return Err(missing());
        }
        // removed between the two calls
        let product = self.store.load(&query.name).await.ok_or_else(missing)?;

        let Some(currency) = query.target_currency() else {
            return Ok(product);
        };
        let rate = self
            .converter
            .convert_exchange_rate(BASE_CURRENCY, &currency)
            .map_err(|e| {
                warn!(error = %e, %currency, "exchange rate lookup failed");
                ServiceError::NotFound(format!("failed to get exchange rate information for {currency}"))
            })?;
        Ok(product.priced_in(&currency, rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::MockExchange;
    use crate::storage::MemoryStore;
    use crate::test_support::{FailingStore, FixedRate};

    fn service() -> ProductService {
        ProductService::new(Arc::new(MemoryStore::<Product>::new()), Arc::new(MockExchange::new()))
    }

    fn product(name: &str, price: f64) -> Product {
        serde_json::from_value(serde_json::json!({ "name": name, "price": price, "currency": "GBP" }))
            .expect("product json")
    }

    fn query(name: &str, currency: Option<&str>) -> ProductQuery {
        ProductQuery { name: name.into(), currency: currency.map(String::from) }
    }

    #[tokio::test]
    async fn create_then_get_in_base_currency() -> Result<(), anyhow::Error> {
        let svc = service();
        let created = svc.create(product("Test product", 100.0)).await?;
        assert_eq!(created.currency, "GBP");

        let got = svc.get(&query("Test product", None)).await?;
        assert_eq!(got, created);

        let got = svc.get(&query("Test product", Some("GBP"))).await?;
        assert_eq!(got.price, 100.0);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_create_keeps_original() -> Result<(), anyhow::Error> {
        let svc = service();
        svc.create(product("Lamp", 10.0)).await?;
        let err = svc.create(product("Lamp", 99.0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists(_)));
        assert_eq!(svc.get(&query("Lamp", None)).await?.price, 10.0);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_product_rejected() {
        let svc = service();
        assert!(matches!(svc.create(product("", 1.0)).await, Err(ServiceError::Model(_))));
        assert!(matches!(svc.create(product("Lamp", -1.0)).await, Err(ServiceError::Model(_))));
    }

    #[tokio::test]
    async fn create_keeps_a_non_base_currency_label() -> Result<(), anyhow::Error> {
        let svc = service();
        let body = serde_json::json!({ "name": "Lamp", "price": 4.0, "currency": "usd" });
        let created = svc.create(serde_json::from_value(body)?).await?;
        assert_eq!(created.currency, "USD");
        assert_eq!(svc.get(&query("Lamp", None)).await?.currency, "USD");
        Ok(())
    }

    #[tokio::test]
    async fn get_converts_without_mutating_store() -> Result<(), anyhow::Error> {
        let svc = service();
        svc.create(product("Test product", 100.0)).await?;

        let usd = svc.get(&query("Test product", Some("USD"))).await?;
        let rate = MockExchange::new().convert_exchange_rate("GBP", "USD")?;
        assert_eq!(usd.price, 100.0 * rate);
        assert_eq!(usd.currency, "USD");

        let stored = svc.get(&query("Test product", None)).await?;
        assert_eq!(stored.price, 100.0);
        assert_eq!(stored.currency, "GBP");
        Ok(())
    }

    #[tokio::test]
    async fn unsupported_currency_is_not_found() -> Result<(), anyhow::Error> {
        let svc = service();
        svc.create(product("Test product", 100.0)).await?;
        let err = svc.get(&query("Test product", Some("ABC"))).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let svc = service();
        assert!(matches!(svc.get(&query("nope", None)).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_returns_every_product_by_name() -> Result<(), anyhow::Error> {
        let svc = service();
        for name in ["Product 1", "Product 2", "Product 3"] {
            svc.create(product(name, 1.0)).await?;
        }
        let all = svc.list().await?;
        assert_eq!(all.len(), 3);
        assert!(all.contains_key("Product 2"));
        Ok(())
    }

    #[tokio::test]
    async fn injected_converter_is_used() -> Result<(), anyhow::Error> {
        let svc = ProductService::new(
            Arc::new(MemoryStore::<Product>::new()),
            Arc::new(FixedRate { to: "EUR", rate: 2.0 }),
        );
        svc.create(product("Lamp", 5.0)).await?;
        assert_eq!(svc.get(&query("Lamp", Some("eur"))).await?.price, 10.0);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_of_one_name_admit_exactly_one() -> Result<(), anyhow::Error> {
        let svc = Arc::new(service());
        let handles: Vec<_> = (0..32)
            .map(|i| {
                let svc = Arc::clone(&svc);
                tokio::spawn(async move { svc.create(product("Contested", i as f64)).await })
            })
            .collect();
        let mut created = 0;
        for h in handles {
            if h.await?.is_ok() {
                created += 1;
            }
        }
        assert_eq!(created, 1);
        Ok(())
    }

    #[tokio::test]
    async fn store_failures_surface_as_storage_errors() {
        let svc = ProductService::new(Arc::new(FailingStore), Arc::new(MockExchange::new()));
        assert!(matches!(svc.create(product("Lamp", 1.0)).await, Err(ServiceError::Storage(_))));
        assert!(matches!(svc.list().await, Err(ServiceError::Storage(_))));
    }
}
