use bson::{doc, oid::ObjectId, Document};
use docstore::{DataAccessor, StoreError};
use entity::restaurant::{field, MenuProjection};
use serde::de::DeserializeOwned;

use crate::server::model::restaurant::{
    CreateRestaurantParams, Dish, RestaurantFilter, UpdateRestaurantParams,
};

/// Number of restaurants per page when no page size is configured.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

pub struct RestaurantRepository<'a> {
    storage: &'a dyn DataAccessor,
    page_size: u64,
}

impl<'a> RestaurantRepository<'a> {
    pub fn new(storage: &'a dyn DataAccessor, page_size: u64) -> Self {
        Self { storage, page_size }
    }

    /// Lists restaurants matching a sparse filter, without their menus.
    ///
    /// The menu is projected out because it can grow without bound and list
    /// responses never include it.
    ///
    /// # Arguments
    /// - `filter` - Present fields constrain the match
    /// - `ordering` - Optional sort key, `-` prefixed for descending order
    /// - `page` - 1-based page of `page_size` entries; `0` returns every match
    ///
    /// # Returns
    /// - `Ok(Vec<restaurant::Model>)` - Matching restaurants, possibly empty
    /// - `Err(StoreError)` - Store failure or undecodable document
    pub async fn list(
        &self,
        filter: &RestaurantFilter,
        ordering: Option<&str>,
        page: u64,
    ) -> Result<Vec<entity::restaurant::Model>, StoreError> {
        let mut query = self
            .storage
            .find(filter.to_document())
            .select(exclude_menu());

        if let Some(ordering) = ordering {
            query = query.sort(ordering);
        }

        if page > 0 {
            query = query
                .skip(self.page_size.saturating_mul(page - 1))
                .limit(self.page_size);
        }

        decode_all(query.all().await?)
    }

    /// Creates a restaurant with a freshly generated identifier.
    ///
    /// # Returns
    /// - `Ok(restaurant::Model)` - The stored document including its new id
    /// - `Err(StoreError)` - Encoding or insertion failed
    pub async fn create(
        &self,
        params: CreateRestaurantParams,
    ) -> Result<entity::restaurant::Model, StoreError> {
        let restaurant = entity::restaurant::Model {
            id: ObjectId::new(),
            name: params.name,
            city: params.city,
            rating: params.rating,
            menu: params.menu.into_iter().map(Dish::into_entity).collect(),
        };

        self.storage.insert(bson::to_document(&restaurant)?).await?;

        Ok(restaurant)
    }

    /// Applies the present fields of `changes` to the first matching restaurant.
    ///
    /// # Returns
    /// - `Ok(())` - Restaurant updated
    /// - `Err(StoreError::NotFound)` - No restaurant matched `filter`
    /// - `Err(StoreError)` - Store failure
    pub async fn update(
        &self,
        filter: &RestaurantFilter,
        changes: &UpdateRestaurantParams,
    ) -> Result<(), StoreError> {
        self.storage
            .update(filter.to_document(), changes.to_set_document())
            .await
    }

    /// Removes the restaurant with the given identifier.
    ///
    /// # Returns
    /// - `Ok(())` - Restaurant removed
    /// - `Err(StoreError::NotFound)` - No restaurant has this id
    /// - `Err(StoreError)` - Store failure
    pub async fn remove(&self, id: ObjectId) -> Result<(), StoreError> {
        self.storage
            .remove(RestaurantFilter::by_id(id).to_document())
            .await
    }

    /// Appends a dish to the menu of the first matching restaurant.
    ///
    /// Uses a single `$push` so concurrent appends to the same restaurant never
    /// overwrite each other.
    ///
    /// # Returns
    /// - `Ok(())` - Dish appended
    /// - `Err(StoreError::NotFound)` - No restaurant matched `filter`
    /// - `Err(StoreError)` - Store failure
    pub async fn add_dish(&self, filter: &RestaurantFilter, dish: Dish) -> Result<(), StoreError> {
        let dish = bson::to_document(&dish.into_entity())?;

        self.storage
            .update(filter.to_document(), push_dish(dish))
            .await
    }

    /// Returns the menu of the first matching restaurant.
    ///
    /// # Returns
    /// - `Ok(Vec<dish::Model>)` - Menu in append order, possibly empty
    /// - `Err(StoreError::NotFound)` - No restaurant matched `filter`
    /// - `Err(StoreError)` - Store failure
    pub async fn list_dish(
        &self,
        filter: &RestaurantFilter,
    ) -> Result<Vec<entity::dish::Model>, StoreError> {
        let document = self
            .storage
            .find(filter.to_document())
            .select(only_menu())
            .one()
            .await?;

        let projection: MenuProjection = bson::from_document(document)?;

        Ok(projection.menu)
    }
}

fn exclude_menu() -> Document {
    let mut projection = Document::new();
    projection.insert(field::MENU, 0);
    projection
}

fn only_menu() -> Document {
    let mut projection = Document::new();
    projection.insert(field::MENU, 1);
    projection.insert(field::ID, 0);
    projection
}

fn push_dish(dish: Document) -> Document {
    let mut push = Document::new();
    push.insert(field::MENU, dish);
    doc! { "$push": push }
}

fn decode_all<T: DeserializeOwned>(documents: Vec<Document>) -> Result<Vec<T>, StoreError> {
    documents
        .into_iter()
        .map(|document| bson::from_document(document).map_err(StoreError::from))
        .collect()
}
