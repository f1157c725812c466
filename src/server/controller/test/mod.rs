use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use bson::oid::ObjectId;
use docstore::DataAccessor;
use std::{sync::Arc, time::Duration};
use test_utils::{builder::TestBuilder, context::TestContext, factory, fixture};
use tower::ServiceExt;

use crate::{
    model::{
        api::ErrorDto,
        restaurant::{DishDto, RestaurantDto},
    },
    server::{
        router,
        service::health::{HealthCheck, StoreChecker},
        state::AppState,
    },
};


/// Builds the full application around the context's store, with a page size of one.
fn app(test: &TestContext) -> Router {
    let store = test.store();
    let health = HealthCheck::new().with_checker(StoreChecker::new("mongo", store.clone()));

    router::app(AppState::new(store, health, 1), Duration::from_secs(5))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> Response {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    app.oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
