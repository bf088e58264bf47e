//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the conversion that
//! normalizes every failure into an [`ApiError`] before it reaches a client. The
//! `AppError` enum is the top-level error type returned by handlers and services;
//! its `IntoResponse` implementation is the only path by which a failure becomes
//! an HTTP response.

pub mod api;
pub mod auth;
pub mod config;
pub mod internal;
pub mod vote;

#[cfg(test)]
mod test;

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{
    api::{ApiError, ApiStatus},
    auth::AuthError,
    config::ConfigError,
    internal::InternalError,
    vote::VoteError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic conversion. Client-facing output is decided
/// by [`AppError::to_api_error`]; details of collaborator failures only ever reach
/// the logs.
#[derive(Error, Debug)]
pub enum AppError {
    /// Failure already expressed in the API vocabulary.
    #[error(transparent)]
    ApiErr(#[from] ApiError),

    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error, surfaced as 401 Unauthorized.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Vote attempted during the cooldown window, surfaced as 429.
    #[error(transparent)]
    VoteErr(#[from] VoteError),

    /// Unexpected internal inconsistency.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Normalizes the error into the API vocabulary.
    ///
    /// # Returns
    /// - The wrapped `ApiError` for `ApiErr`
    /// - 429 for `VoteErr`
    /// - 401 for `AuthErr`
    /// - 500 with the generic message for everything else
    pub fn to_api_error(&self) -> ApiError {
        match self {
            Self::ApiErr(err) => err.clone(),
            Self::VoteErr(_) => ApiError::new(ApiStatus::TooManyRequests),
            Self::AuthErr(_) => ApiError::new(ApiStatus::Unauthorized),
            _ => ApiError::new(ApiStatus::InternalServerError),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Internal errors are logged with full details while the client only receives
/// the generic table message. Rate limit errors carry a `Retry-After` header
/// with the remaining cooldown rounded up to whole seconds.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let api_error = self.to_api_error();

        match api_error.status() {
            ApiStatus::InternalServerError => tracing::error!("{}", self),
            _ => tracing::debug!("Request failed: {}", self),
        }

        let mut response = api_error.into_response();

        if let Self::VoteErr(err) = &self {
            let retry_after = err.retry_after();
            tracing::debug!("Vote rejected, retry after {}s", retry_after.num_seconds());

            let millis = retry_after.num_milliseconds().max(0);
            let seconds = (millis + 999) / 1000;
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(seconds));
        }

        response
    }
}
