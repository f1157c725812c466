mod model;
mod server;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::Config,
    error::AppError,
    router,
    service::health::{HealthCheck, StoreChecker},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e);
        }
    };

    let client = startup::connect_to_store(&config).await?;
    let restaurants = Arc::new(startup::restaurant_collection(
        &client,
        &config.database_name,
    ));

    let health = HealthCheck::new().with_checker(StoreChecker::new("mongo", restaurants.clone()));
    let state = AppState::new(restaurants, health, config.page_size);
    let app = router::app(state, config.request_timeout);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped, closing store connection");
    client.shutdown().await;

    Ok(())
}
