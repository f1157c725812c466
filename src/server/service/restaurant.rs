use bson::oid::ObjectId;
use docstore::DataAccessor;

use crate::server::{
    data::restaurant::RestaurantRepository,
    error::AppError,
    model::restaurant::{
        CreateRestaurantParams, Dish, ListRestaurantsParams, Restaurant, RestaurantFilter,
        UpdateRestaurantParams,
    },
};

pub struct RestaurantService<'a> {
    store: &'a dyn DataAccessor,
    page_size: u64,
}

impl<'a> RestaurantService<'a> {
    pub fn new(store: &'a dyn DataAccessor, page_size: u64) -> Self {
        Self { store, page_size }
    }

    fn repo(&self) -> RestaurantRepository<'a> {
        RestaurantRepository::new(self.store, self.page_size)
    }

    /// Lists restaurants matching the filter, one page at a time when a page is given
    pub async fn list(&self, params: ListRestaurantsParams) -> Result<Vec<Restaurant>, AppError> {
        let restaurants = self
            .repo()
            .list(&params.filter, params.ordering.as_deref(), params.page)
            .await?;

        Ok(restaurants.into_iter().map(Restaurant::from_entity).collect())
    }

    /// Creates a restaurant and returns it with its assigned id
    pub async fn create(&self, params: CreateRestaurantParams) -> Result<Restaurant, AppError> {
        let restaurant = self.repo().create(params).await?;

        tracing::debug!("Created restaurant {}", restaurant.id);

        Ok(Restaurant::from_entity(restaurant))
    }

    /// Applies a partial change to the restaurant with the given id
    pub async fn update(&self, id: ObjectId, params: UpdateRestaurantParams) -> Result<(), AppError> {
        self.repo()
            .update(&RestaurantFilter::by_id(id), &params)
            .await?;

        Ok(())
    }

    /// Removes the restaurant with the given id
    pub async fn remove(&self, id: ObjectId) -> Result<(), AppError> {
        self.repo().remove(id).await?;

        Ok(())
    }

    /// Appends a dish to the menu of the restaurant with the given id
    pub async fn add_dish(&self, id: ObjectId, dish: Dish) -> Result<(), AppError> {
        self.repo()
            .add_dish(&RestaurantFilter::by_id(id), dish)
            .await?;

        Ok(())
    }

    /// Gets the menu of the restaurant with the given id
    pub async fn list_dish(&self, id: ObjectId) -> Result<Vec<Dish>, AppError> {
        let menu = self
            .repo()
            .list_dish(&RestaurantFilter::by_id(id))
            .await?;

        Ok(menu.into_iter().map(Dish::from_entity).collect())
    }
}
