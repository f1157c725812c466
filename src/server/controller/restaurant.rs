use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        restaurant::{
            CreateDishDto, CreateRestaurantDto, DishDto, RestaurantDto, RestaurantQueryDto,
            UpdateRestaurantDto,
        },
    },
    server::{
        error::{input::InputError, AppError},
        model::restaurant::{
            CreateRestaurantParams, Dish, ListRestaurantsParams, UpdateRestaurantParams,
        },
        service::restaurant::RestaurantService,
        state::AppState,
        util::parse::parse_object_id,
    },
};

/// Tag for grouping restaurant endpoints in OpenAPI documentation
pub static RESTAURANT_TAG: &str = "restaurant";

fn malformed_json(rejection: JsonRejection) -> AppError {
    InputError::Malformed(rejection.body_text()).into()
}

fn malformed_query(rejection: QueryRejection) -> AppError {
    InputError::Malformed(rejection.body_text()).into()
}

/// List restaurants.
///
/// Returns every restaurant matching the query filters, without menus. Filters
/// are exact matches on the fields that are present. When `page` is given the
/// result is limited to one page of the configured page size.
///
/// # Arguments
/// - `state` - Application state containing the restaurant store
/// - `query` - Filters plus optional `page` and `ordering`
///
/// # Returns
/// - `200 OK` - Matching restaurants, possibly an empty array
/// - `400 Bad Request` - Malformed filter, page or ordering
/// - `503 Service Unavailable` - Store failure
#[utoipa::path(
    get,
    path = "/restaurants",
    tag = RESTAURANT_TAG,
    params(RestaurantQueryDto),
    responses(
        (status = 200, description = "Matching restaurants", body = Vec<RestaurantDto>),
        (status = 400, description = "Malformed query", body = ErrorDto),
        (status = 503, description = "Store unavailable", body = ErrorDto)
    ),
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
    query: Result<Query<RestaurantQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query.map_err(malformed_query)?;
    let params = ListRestaurantsParams::from_dto(query)?;

    let service = RestaurantService::new(state.restaurants.as_ref(), state.page_size);
    let restaurants = service.list(params).await?;

    let restaurants: Vec<RestaurantDto> = restaurants.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(restaurants)))
}

/// Create a restaurant.
///
/// Validates the submitted restaurant and stores it under a freshly generated id.
///
/// # Returns
/// - `200 OK` - Restaurant created
/// - `400 Bad Request` - Malformed or invalid body
/// - `503 Service Unavailable` - Store failure
#[utoipa::path(
    post,
    path = "/restaurants",
    tag = RESTAURANT_TAG,
    request_body = CreateRestaurantDto,
    responses(
        (status = 200, description = "Restaurant created"),
        (status = 400, description = "Malformed or invalid restaurant", body = ErrorDto),
        (status = 503, description = "Store unavailable", body = ErrorDto)
    ),
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(malformed_json)?;
    let params = CreateRestaurantParams::from_dto(payload)?;

    let service = RestaurantService::new(state.restaurants.as_ref(), state.page_size);
    service.create(params).await?;

    Ok(StatusCode::OK)
}

/// Update a restaurant.
///
/// Sets the fields present in the body and leaves the others untouched. The menu
/// cannot be changed through this endpoint.
///
/// # Returns
/// - `200 OK` - Restaurant updated
/// - `400 Bad Request` - Malformed id, malformed body or empty change
/// - `404 Not Found` - No restaurant with this id
/// - `503 Service Unavailable` - Store failure
#[utoipa::path(
    post,
    path = "/restaurants/{restaurant_id}",
    tag = RESTAURANT_TAG,
    params(
        ("restaurant_id" = String, Path, description = "Restaurant id (24 hex characters)")
    ),
    request_body = UpdateRestaurantDto,
    responses(
        (status = 200, description = "Restaurant updated"),
        (status = 400, description = "Malformed id or change", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 503, description = "Store unavailable", body = ErrorDto)
    ),
)]
pub async fn update_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
    payload: Result<Json<UpdateRestaurantDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_object_id(&restaurant_id)?;
    let Json(payload) = payload.map_err(malformed_json)?;
    let params = UpdateRestaurantParams::from_dto(payload)?;

    let service = RestaurantService::new(state.restaurants.as_ref(), state.page_size);
    service.update(id, params).await?;

    Ok(StatusCode::OK)
}

/// Remove a restaurant.
///
/// # Returns
/// - `200 OK` - Restaurant removed
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - No restaurant with this id
/// - `503 Service Unavailable` - Store failure
#[utoipa::path(
    delete,
    path = "/restaurants/{restaurant_id}",
    tag = RESTAURANT_TAG,
    params(
        ("restaurant_id" = String, Path, description = "Restaurant id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Restaurant removed"),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 503, description = "Store unavailable", body = ErrorDto)
    ),
)]
pub async fn remove_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_object_id(&restaurant_id)?;

    let service = RestaurantService::new(state.restaurants.as_ref(), state.page_size);
    service.remove(id).await?;

    Ok(StatusCode::OK)
}

/// Add a dish to a restaurant menu.
///
/// Appends the dish to the end of the menu.
///
/// # Returns
/// - `200 OK` - Dish added
/// - `400 Bad Request` - Malformed id or invalid dish
/// - `404 Not Found` - No restaurant with this id
/// - `503 Service Unavailable` - Store failure
#[utoipa::path(
    post,
    path = "/restaurants/{restaurant_id}/dish",
    tag = RESTAURANT_TAG,
    params(
        ("restaurant_id" = String, Path, description = "Restaurant id (24 hex characters)")
    ),
    request_body = CreateDishDto,
    responses(
        (status = 200, description = "Dish added"),
        (status = 400, description = "Malformed id or dish", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 503, description = "Store unavailable", body = ErrorDto)
    ),
)]
pub async fn add_dish(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
    payload: Result<Json<CreateDishDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_object_id(&restaurant_id)?;
    let Json(payload) = payload.map_err(malformed_json)?;
    let dish = Dish::from_dto(payload)?;

    let service = RestaurantService::new(state.restaurants.as_ref(), state.page_size);
    service.add_dish(id, dish).await?;

    Ok(StatusCode::OK)
}

/// List the menu of a restaurant.
///
/// # Returns
/// - `200 OK` - Dishes in the order they were added, possibly an empty array
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - No restaurant with this id
/// - `503 Service Unavailable` - Store failure
#[utoipa::path(
    get,
    path = "/restaurants/{restaurant_id}/dish",
    tag = RESTAURANT_TAG,
    params(
        ("restaurant_id" = String, Path, description = "Restaurant id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Restaurant menu", body = Vec<DishDto>),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 503, description = "Store unavailable", body = ErrorDto)
    ),
)]
pub async fn list_dishes(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_object_id(&restaurant_id)?;

    let service = RestaurantService::new(state.restaurants.as_ref(), state.page_size);
    let menu = service.list_dish(id).await?;

    let menu: Vec<DishDto> = menu.into_iter().map(Dish::into_dto).collect();

    Ok((StatusCode::OK, Json(menu)))
}
