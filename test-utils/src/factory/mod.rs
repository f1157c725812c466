//! Factory methods for creating test data.
//!
//! Factories insert documents into a store with sensible defaults, reducing
//! boilerplate in tests. Each entity has a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let restaurant = factory::create_restaurant(&collection).await?;
//!
//! let rated = factory::restaurant::RestaurantFactory::new(&collection)
//!     .name("Pelmennaya")
//!     .rating(Some(9.0))
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod restaurant;

pub use restaurant::create_restaurant;
