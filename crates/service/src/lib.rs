//! Service layer: the shared store, the currency collaborator, and the two
//! services built on them.
//! - `storage`: `Storage<V>` capability and the in-memory `MemoryStore`.
//! - `exchange`: `CurrencyConverter` and the static-table `MockExchange`.
//! - `keyvalue` / `products`: business rules in front of the store.

pub mod errors;
pub mod exchange;
pub mod keyvalue;
pub mod products;
pub mod storage;
#[cfg(test)]
pub mod test_support;
