//! HTTP request handlers.
//!
//! Controllers decode requests into parameter models, call the service layer and
//! convert the resulting domain models into DTOs. Every failure is returned as an
//! `AppError`, whose `IntoResponse` impl picks the status code.

pub mod health;
pub mod restaurant;

#[cfg(test)]
mod test;
