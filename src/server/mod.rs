//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic and collaborator interfaces
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Error taxonomy and HTTP response mapping
//! - **Middleware** (`middleware/`) - Error reporting and request guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, collaborators)
//! - **Startup** (`startup`) - Initialization of logging, database and clients
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to a controller, or to the 404 fallback
//! 2. **Controller** extracts parameters and calls the services
//! 3. **Service** applies business rules and calls collaborators or repositories
//! 4. Any failure becomes an `AppError`, normalized into an `ApiError`
//! 5. **Middleware** reports the failure to the error sink, then the response is sent

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
mod test;
