//! Application state shared across all request handlers.
//!
//! `AppState` is built once in `main` and cloned into every handler through Axum's
//! state extraction. All fields are cheap to clone.

use docstore::DataAccessor;
use std::sync::Arc;

use crate::server::service::health::HealthCheck;

#[derive(Clone)]
pub struct AppState {
    /// Restaurant collection.
    ///
    /// Backed by MongoDB in production and by an in-memory collection in tests.
    /// Every handler shares this one handle; no second connection is opened.
    pub restaurants: Arc<dyn DataAccessor>,

    /// Checks run by the `/` health endpoint.
    pub health: HealthCheck,

    /// Number of restaurants per page when listing with `page`.
    pub page_size: u64,
}

impl AppState {
    pub fn new(restaurants: Arc<dyn DataAccessor>, health: HealthCheck, page_size: u64) -> Self {
        Self {
            restaurants,
            health,
            page_size,
        }
    }
}
