//! Test fixtures providing reusable test data without store insertion.
//!
//! This module contains fixture functions that create in-memory document models
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the store.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let restaurant = fixture::restaurant::entity();
//! let dish = fixture::dish::entity();
//! ```

pub mod dish;
pub mod restaurant;
