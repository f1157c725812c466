//! Capability-set access to a single document collection.
//!
//! The repositories of the service never talk to a database driver directly.
//! They depend on two traits defined here:
//!
//! - [`DataAccessor`] - find/insert/update/remove against one collection
//! - [`Querier`] - a lazily configured cursor returned by `find`, chained with
//!   `select`, `sort`, `skip` and `limit` and materialized with `all` or `one`
//!
//! Two adapters implement them:
//!
//! - [`MongoCollection`] - backed by a MongoDB collection through the official driver
//! - [`MemoryCollection`] - an in-process collection used by tests
//!
//! # Errors
//!
//! Every operation returns [`StoreError`]. "Nothing matched" is reported as the
//! dedicated [`StoreError::NotFound`] variant so that callers can tell a missing
//! document apart from a failing store.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bson::doc;
//! use docstore::{DataAccessor, MemoryCollection};
//!
//! let collection = MemoryCollection::new();
//! collection.insert(doc! { "name": "Pizzeria", "rating": 7.5 }).await?;
//!
//! let documents = collection
//!     .find(doc! {})
//!     .select(doc! { "menu": 0 })
//!     .sort("-rating")
//!     .limit(10)
//!     .all()
//!     .await?;
//! ```

mod accessor;
pub mod error;
pub mod memory;
pub mod mongo;
mod sort;

pub use accessor::{DataAccessor, Querier};
pub use error::StoreError;
pub use memory::MemoryCollection;
pub use mongo::MongoCollection;
pub use sort::SortKey;
