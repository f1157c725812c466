//! Store double that behaves like an unreachable database.

use async_trait::async_trait;
use bson::Document;
use docstore::{DataAccessor, Querier, StoreError};

pub const UNAVAILABLE_MESSAGE: &str = "store unavailable";

/// [`DataAccessor`] whose every operation fails with `StoreError::Backend`.
///
/// Never reports `NotFound`, so callers always take their generic-failure path.
pub struct UnavailableStore;

fn unavailable() -> StoreError {
    StoreError::Backend(UNAVAILABLE_MESSAGE.to_string())
}

#[async_trait]
impl DataAccessor for UnavailableStore {
    fn find(&self, _filter: Document) -> Box<dyn Querier> {
        Box::new(UnavailableQuery)
    }

    async fn insert(&self, _document: Document) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn update(&self, _filter: Document, _change: Document) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn remove(&self, _filter: Document) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }
}

struct UnavailableQuery;

#[async_trait]
impl Querier for UnavailableQuery {
    fn select(self: Box<Self>, _projection: Document) -> Box<dyn Querier> {
        self
    }

    fn sort(self: Box<Self>, _key: &str) -> Box<dyn Querier> {
        self
    }

    fn skip(self: Box<Self>, _n: u64) -> Box<dyn Querier> {
        self
    }

    fn limit(self: Box<Self>, _n: u64) -> Box<dyn Querier> {
        self
    }

    async fn all(&self) -> Result<Vec<Document>, StoreError> {
        Err(unavailable())
    }

    async fn one(&self) -> Result<Document, StoreError> {
        Err(unavailable())
    }
}
