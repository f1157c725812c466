use docstore::MongoCollection;
use entity::prelude::RESTAURANT_COLLECTION;
use mongodb::Client;

use crate::server::{config::Config, error::AppError};

/// Connects to MongoDB and verifies the server answers.
///
/// The driver connects lazily, so a `ping` is issued to fail fast on a wrong
/// address instead of on the first request.
///
/// # Arguments
/// - `config` - Application configuration containing the MongoDB address
///
/// # Returns
/// - `Ok(Client)` - Connected client, shared for the lifetime of the process
/// - `Err(AppError::MongoErr)` - Invalid address or unreachable server
pub async fn connect_to_store(config: &Config) -> Result<Client, AppError> {
    let client = Client::with_uri_str(&config.mongo_address).await?;

    client
        .database(&config.database_name)
        .run_command(bson::doc! { "ping": 1 })
        .await?;

    Ok(client)
}

/// Opens the restaurant collection of the configured database.
pub fn restaurant_collection(client: &Client, database_name: &str) -> MongoCollection {
    MongoCollection::new(&client.database(database_name), RESTAURANT_COLLECTION)
}

/// Resolves when the process receives ctrl-c or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
