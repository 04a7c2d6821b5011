pub mod error;
pub mod postgrest;
pub mod query;

pub use error::StoreError;
pub use postgrest::PostgrestStore;
pub use query::SelectQuery;

use async_trait::async_trait;
use serde_json::Value;

/// Collection names the endpoint touches. All live in the hosted store.
pub mod collections {
    pub const PRODUCTS: &str = "products";
    pub const BASKET: &str = "basket";
    pub const CART: &str = "cart";
    pub const ORDERS: &str = "orders";
}

/// Data-store capability: filtered/ordered reads, single-row writes, and
/// the one conditional operation the basket flow needs.
///
/// Implementations hold no per-request state and are shared behind an `Arc`.
#[async_trait]
pub trait Store: Send + Sync {
    /// Filtered, ordered read against a named collection. Rows come back as
    /// raw JSON objects and are passed through to the client unchanged.
    async fn select(&self, collection: &str, query: SelectQuery) -> Result<Vec<Value>, StoreError>;

    /// Single-row insert. No returning payload is requested.
    async fn insert(&self, collection: &str, row: Value) -> Result<(), StoreError>;

    /// Delete by primary key. Deleting an id that does not exist is not an
    /// error; the store reports success for zero affected rows.
    async fn delete_by_id(&self, collection: &str, id: i64) -> Result<(), StoreError>;

    /// Partial update by primary key.
    async fn update_by_id(&self, collection: &str, id: i64, changes: Value) -> Result<(), StoreError>;

    /// Atomic compare-and-decrement of a product's available quantity.
    /// Returns whether the requested amount was available (and reserved).
    async fn reserve_stock(&self, product_id: i64, quantity: i64) -> Result<bool, StoreError>;
}
