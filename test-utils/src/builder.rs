use docstore::DataAccessor;
use entity::restaurant;

use crate::{context::TestContext, error::TestError, fixture};

/// Builder for creating test contexts with a pre-seeded restaurant collection.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture};
///
/// let test = TestBuilder::new()
///     .with_restaurant(fixture::restaurant::entity())
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Restaurant documents inserted, in order, during `build()`.
    restaurants: Vec<restaurant::Model>,

    /// Whether the built context hands out a failing store.
    unavailable: bool,
}

impl TestBuilder {
    /// Creates a new test builder with an empty collection.
    pub fn new() -> Self {
        Self {
            restaurants: Vec::new(),
            unavailable: false,
        }
    }

    /// Adds a restaurant document to seed the collection with.
    pub fn with_restaurant(mut self, restaurant: restaurant::Model) -> Self {
        self.restaurants.push(restaurant);
        self
    }

    /// Adds several restaurant documents, preserving their order.
    pub fn with_restaurants(
        mut self,
        restaurants: impl IntoIterator<Item = restaurant::Model>,
    ) -> Self {
        self.restaurants.extend(restaurants);
        self
    }

    /// Seeds the collection with `fixture::restaurant::simple_restaurant_set()`.
    pub fn with_simple_restaurant_set(self) -> Self {
        self.with_restaurants(fixture::restaurant::simple_restaurant_set())
    }

    /// Makes `TestContext::store()` return a store that fails every operation.
    ///
    /// Used to exercise the 503 paths of controllers and the health check.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Builds the test context and inserts the configured documents.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the seeded collection
    /// - `Err(TestError::Store)` - A document failed to encode or insert
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        for restaurant in self.restaurants {
            context
                .collection
                .insert(bson::to_document(&restaurant).map_err(docstore::StoreError::from)?)
                .await?;
        }

        context.unavailable = self.unavailable;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
