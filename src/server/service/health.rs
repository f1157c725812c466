//! Readiness checks aggregated behind the `/` endpoint.

use async_trait::async_trait;
use docstore::DataAccessor;
use std::{error::Error, sync::Arc};

/// Error type returned by a failing check.
pub type CheckError = Box<dyn Error + Send + Sync>;

/// A single named readiness check.
#[async_trait]
pub trait Checker: Send + Sync {
    /// Name reported to the client when this check fails.
    fn message(&self) -> &str;

    async fn check(&self) -> Result<(), CheckError>;
}

/// Checks that the document store answers a ping.
pub struct StoreChecker {
    name: String,
    store: Arc<dyn DataAccessor>,
}

impl StoreChecker {
    pub fn new(name: impl Into<String>, store: Arc<dyn DataAccessor>) -> Self {
        Self {
            name: name.into(),
            store,
        }
    }
}

#[async_trait]
impl Checker for StoreChecker {
    fn message(&self) -> &str {
        &self.name
    }

    async fn check(&self) -> Result<(), CheckError> {
        self.store.ping().await?;

        Ok(())
    }
}

/// Outcome of running every registered check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Ok,
    /// Carries the message of the first failing checker.
    Unavailable(String),
}

/// Ordered list of checkers run on each health request.
#[derive(Clone, Default)]
pub struct HealthCheck {
    checkers: Vec<Arc<dyn Checker>>,
}

impl HealthCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a checker after the ones already added.
    pub fn with_checker(mut self, checker: impl Checker + 'static) -> Self {
        self.checkers.push(Arc::new(checker));
        self
    }

    /// Runs the checkers in registration order.
    ///
    /// Stops at the first failure; later checkers are not run.
    ///
    /// # Returns
    /// - `HealthStatus::Ok` - Every checker passed, or none are registered
    /// - `HealthStatus::Unavailable(message)` - The failing checker's message
    pub async fn run(&self) -> HealthStatus {
        for checker in &self.checkers {
            if let Err(err) = checker.check().await {
                tracing::warn!("Health check {} failed: {}", checker.message(), err);

                return HealthStatus::Unavailable(checker.message().to_string());
            }
        }

        HealthStatus::Ok
    }
}
