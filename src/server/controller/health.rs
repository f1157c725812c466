use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::server::{service::health::HealthStatus, state::AppState};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report service health.
///
/// Runs the registered checks in order and stops at the first failure.
///
/// # Returns
/// - `200 OK` - Body `Ok`, every check passed
/// - `503 Service Unavailable` - Body is the name of the failing check
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Every check passed", body = String),
        (status = 503, description = "Name of the failing check", body = String)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.health.run().await {
        HealthStatus::Ok => (StatusCode::OK, "Ok".to_string()),
        HealthStatus::Unavailable(message) => (StatusCode::SERVICE_UNAVAILABLE, message),
    }
}
