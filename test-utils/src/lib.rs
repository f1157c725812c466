//! Venues Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests for the venues
//! service. This crate offers a builder pattern for creating test contexts backed by an
//! in-memory document collection, plus fixtures and factories for restaurant documents.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the in-memory collection
//! - **UnavailableStore**: Store double whose every operation fails, for 503 paths
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_restaurant_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_simple_restaurant_set()
//!         .build()
//!         .await?;
//!
//!     let store = test.store();
//!     // Perform repository operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod unavailable;
