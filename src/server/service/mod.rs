//! Service layer between the controllers and the repositories.
//!
//! Services turn validated parameters into repository calls and convert stored
//! document models into domain models. Store errors are lifted into `AppError` here
//! so that controllers only deal with one error type.

pub mod health;
pub mod restaurant;
