use crate::server::{
    data::restaurant::RestaurantRepository,
    model::restaurant::{CreateRestaurantParams, Dish, RestaurantFilter, UpdateRestaurantParams},
};
use bson::oid::ObjectId;
use docstore::{DataAccessor, StoreError};
use test_utils::{builder::TestBuilder, factory, fixture};

mod add_dish;
mod create;
mod list;
mod list_dish;
mod mongo;
mod remove;
mod update;
