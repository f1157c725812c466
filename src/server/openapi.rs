use utoipa::OpenApi;

/// OpenAPI document for the restaurant API, served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Venues API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Restaurants and their menus"
    ),
    paths(
        crate::server::controller::health::health,
        crate::server::controller::restaurant::list_restaurants,
        crate::server::controller::restaurant::create_restaurant,
        crate::server::controller::restaurant::update_restaurant,
        crate::server::controller::restaurant::remove_restaurant,
        crate::server::controller::restaurant::add_dish,
        crate::server::controller::restaurant::list_dishes,
    ),
    components(
        schemas(
            crate::model::api::ErrorDto,
            crate::model::restaurant::RestaurantDto,
            crate::model::restaurant::DishDto,
            crate::model::restaurant::CreateRestaurantDto,
            crate::model::restaurant::CreateDishDto,
            crate::model::restaurant::UpdateRestaurantDto,
        )
    ),
    tags(
        (name = "restaurant", description = "Restaurants and menus"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
