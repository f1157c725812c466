//! HTTP API backend for restaurants and their menus.
//!
//! The backend uses Axum as the web framework and MongoDB, reached through the
//! `docstore` capability traits, as the document store.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Repository orchestration and health checks
//! - **Data Layer** (`data/`) - Store operations on document models
//! - **Model Layer** (`model/`) - Domain models, filters and validated parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (store handle, health checks)
//! - **Startup** (`startup`) - Store connection and shutdown signal handling
//! - **Router** (`router`) - Route table and middleware
//! - **OpenAPI** (`openapi`) - Generated API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** parses ids, decodes DTOs into validated params, calls the service
//! 3. **Service** calls the repository and converts document models to domain models
//! 4. **Data** issues store operations through `DataAccessor`
//! 5. **Controller** converts domain models to DTOs and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod openapi;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
