//! Restaurant factory for creating test restaurant documents.

use bson::oid::ObjectId;
use docstore::{DataAccessor, StoreError};
use entity::{dish, restaurant};

use crate::{factory::helpers::next_id, fixture};

/// Factory for inserting test restaurants with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::restaurant::RestaurantFactory;
///
/// let restaurant = RestaurantFactory::new(&collection)
///     .city("Kazan")
///     .dish(fixture::dish::entity())
///     .build()
///     .await?;
/// ```
pub struct RestaurantFactory<'a> {
    store: &'a dyn DataAccessor,
    name: String,
    city: String,
    rating: Option<f64>,
    menu: Vec<dish::Model>,
}

impl<'a> RestaurantFactory<'a> {
    /// Creates a new RestaurantFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Restaurant {id}"` where id is auto-incremented
    /// - city: `fixture::restaurant::DEFAULT_CITY`
    /// - rating: `fixture::restaurant::DEFAULT_RATING`
    /// - menu: empty
    pub fn new(store: &'a dyn DataAccessor) -> Self {
        Self {
            store,
            name: format!("Restaurant {}", next_id()),
            city: fixture::restaurant::DEFAULT_CITY.to_string(),
            rating: fixture::restaurant::DEFAULT_RATING,
            menu: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn rating(mut self, rating: Option<f64>) -> Self {
        self.rating = rating;
        self
    }

    /// Appends a dish to the initial menu.
    pub fn dish(mut self, dish: dish::Model) -> Self {
        self.menu.push(dish);
        self
    }

    /// Inserts the restaurant and returns the stored model.
    ///
    /// # Returns
    /// - `Ok(restaurant::Model)` - The inserted document with its generated id
    /// - `Err(StoreError)` - Encoding or insertion failed
    pub async fn build(self) -> Result<restaurant::Model, StoreError> {
        let model = restaurant::Model {
            id: ObjectId::new(),
            name: self.name,
            city: self.city,
            rating: self.rating,
            menu: self.menu,
        };

        self.store.insert(bson::to_document(&model)?).await?;

        Ok(model)
    }
}

/// Inserts a restaurant with default values.
pub async fn create_restaurant(store: &dyn DataAccessor) -> Result<restaurant::Model, StoreError> {
    RestaurantFactory::new(store).build().await
}
