use std::sync::Arc;

use models::product::Product;
use service::exchange::MockExchange;
use service::keyvalue::KeyValueService;
use service::products::ProductService;
use service::storage::MemoryStore;

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub keyvalue: Arc<KeyValueService>,
    pub products: Arc<ProductService>,
}

impl AppState {
    pub fn new(keyvalue: KeyValueService, products: ProductService) -> Self {
        Self { keyvalue: Arc::new(keyvalue), products: Arc::new(products) }
    }

    /// Fresh in-memory stores (one per value type) and the static rate table.
    pub fn in_memory() -> Self {
        let entries = Arc::new(MemoryStore::<String>::new());
        let products = Arc::new(MemoryStore::<Product>::new());
        let exchange = Arc::new(MockExchange::new());
        Self::new(KeyValueService::new(entries), ProductService::new(products, exchange))
    }
}
