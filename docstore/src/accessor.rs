use async_trait::async_trait;
use bson::Document;

use crate::error::StoreError;

/// Operations against one document collection.
///
/// Filters are sparse documents: every field present constrains the match,
/// absent fields do not. Change documents passed to `update` use update
/// operators (`$set`, `$push`) and are applied to the first matching document.
///
/// Implementations are shared between concurrently running requests, so they
/// must be `Send + Sync`. Each call is one round-trip to the underlying store.
#[async_trait]
pub trait DataAccessor: Send + Sync {
    /// Starts a query. Nothing is sent to the store until a terminal cursor
    /// method is awaited.
    fn find(&self, filter: Document) -> Box<dyn Querier>;

    async fn insert(&self, document: Document) -> Result<(), StoreError>;

    /// # Returns
    /// - `Ok(())` - A document matched and the change was applied
    /// - `Err(StoreError::NotFound)` - No document matched the filter
    /// - `Err(_)` - The store failed
    async fn update(&self, filter: Document, change: Document) -> Result<(), StoreError>;

    /// Removes the first document matching `filter`.
    ///
    /// # Returns
    /// - `Ok(())` - A document was removed
    /// - `Err(StoreError::NotFound)` - No document matched the filter
    /// - `Err(_)` - The store failed
    async fn remove(&self, filter: Document) -> Result<(), StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// A chainable cursor over the result of [`DataAccessor::find`].
///
/// Every chain method consumes the cursor and returns the same boxed trait
/// object, so adapters and test doubles can be swapped freely.
#[async_trait]
pub trait Querier: Send + Sync {
    /// Restricts the returned fields. A projection is either inclusive
    /// (`{"menu": 1}`) or exclusive (`{"menu": 0}`); `_id` is returned unless
    /// explicitly excluded.
    fn select(self: Box<Self>, projection: Document) -> Box<dyn Querier>;

    /// Orders results by one field. A leading `-` sorts descending.
    fn sort(self: Box<Self>, key: &str) -> Box<dyn Querier>;

    fn skip(self: Box<Self>, n: u64) -> Box<dyn Querier>;

    /// Caps the number of results. A limit of `0` means no limit.
    fn limit(self: Box<Self>, n: u64) -> Box<dyn Querier>;

    /// Materializes every matching document. An empty result is not an error.
    async fn all(&self) -> Result<Vec<Document>, StoreError>;

    /// Materializes the first matching document, or `StoreError::NotFound`.
    async fn one(&self) -> Result<Document, StoreError>;
}
