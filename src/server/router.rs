use axum::{
    error_handling::HandleErrorLayer,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::time::Duration;
use tower::{timeout::TimeoutLayer, BoxError, ServiceBuilder};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::{
            health::health,
            restaurant::{
                add_dish, create_restaurant, list_dishes, list_restaurants, remove_restaurant,
                update_restaurant,
            },
        },
        openapi::ApiDoc,
        state::AppState,
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/restaurants", get(list_restaurants).post(create_restaurant))
        .route(
            "/restaurants/{restaurant_id}",
            post(update_restaurant).delete(remove_restaurant),
        )
        .route(
            "/restaurants/{restaurant_id}/dish",
            get(list_dishes).post(add_dish),
        )
}

/// Builds the complete application with documentation and middleware.
///
/// Requests running longer than `request_timeout` are answered with 503 so that
/// graceful shutdown never waits on a stuck store call for longer than that.
pub fn app(state: AppState, request_timeout: Duration) -> Router {
    router()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}

async fn handle_timeout_error(err: BoxError) -> (StatusCode, Json<ErrorDto>) {
    tracing::error!("Request failed in middleware: {}", err);

    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorDto {
            error: "Request timed out".to_string(),
        }),
    )
}
