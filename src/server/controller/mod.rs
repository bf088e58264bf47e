//! HTTP request handlers.
//!
//! Controllers extract request data, call into the service layer and return either
//! a response DTO or an `AppError`, which the error layer turns into the uniform
//! failure envelope.

pub mod auth;
pub mod guild;
pub mod index;
pub mod report;
pub mod vote;
