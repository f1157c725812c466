//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod input;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use docstore::StoreError;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, input::InputError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Only raised before the server starts accepting requests.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Malformed or invalid client input.
    ///
    /// Results in 400 Bad Request with the input error's message.
    #[error(transparent)]
    InputErr(#[from] InputError),

    /// Document store operation error.
    ///
    /// `StoreError::NotFound` results in 404 Not Found. Every other store failure
    /// results in 503 Service Unavailable with details logged server-side only.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// MongoDB client error while connecting at startup.
    #[error(transparent)]
    MongoErr(#[from] mongodb::error::Error),

    /// Socket error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InputErr`
/// - 404 Not Found - For `StoreErr(StoreError::NotFound)`
/// - 503 Service Unavailable - For any other `StoreErr`
/// - 500 Internal Server Error - For startup-only errors (config, connection, I/O)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::InputErr(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::StoreErr(StoreError::NotFound) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Restaurant not found".to_string(),
                }),
            )
                .into_response(),
            Self::StoreErr(err) => ServiceUnavailable(err).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting a store failure into a 503 Service Unavailable response.
///
/// Logs the error and returns a generic message so that no store details reach the client.
pub struct ServiceUnavailable<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for ServiceUnavailable<E> {
    fn into_response(self) -> Response {
        tracing::error!("Store unavailable: {}", self.0);

        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorDto {
                error: "Service unavailable".to_string(),
            }),
        )
            .into_response()
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
