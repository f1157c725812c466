use docstore::{DataAccessor, MemoryCollection};
use std::sync::Arc;

use crate::unavailable::UnavailableStore;

/// Test context holding the restaurant collection used by a single test.
///
/// Every context owns its own in-memory collection, so tests never observe each
/// other's documents and can run concurrently.
pub struct TestContext {
    /// In-memory collection seeded by `TestBuilder::build()`.
    ///
    /// Exposed directly so tests can inspect raw documents after exercising the
    /// code under test.
    pub collection: MemoryCollection,

    /// When set, `store()` hands out a store whose every operation fails.
    pub unavailable: bool,
}

impl TestContext {
    /// Creates a new test context with an empty collection.
    pub fn new() -> Self {
        Self {
            collection: MemoryCollection::new(),
            unavailable: false,
        }
    }

    /// Returns the store handle to inject into repositories and application state.
    ///
    /// # Returns
    /// - The shared in-memory collection, or
    /// - An `UnavailableStore` if the context was built with `unavailable()`
    pub fn store(&self) -> Arc<dyn DataAccessor> {
        if self.unavailable {
            Arc::new(UnavailableStore)
        } else {
            Arc::new(self.collection.clone())
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
