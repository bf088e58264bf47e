//! Closed vocabulary of failures returned to API callers.
//!
//! Every failure response produced by the gateway is an [`ApiError`]. Its
//! status comes from the fixed [`ApiStatus`] table and its message defaults to
//! the table entry for that status, keeping status and message in a single
//! source of truth.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Status codes an [`ApiError`] may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiStatus {
    #[default]
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    TooManyRequests,
    InternalServerError,
}

impl ApiStatus {
    /// Every supported status, in ascending code order.
    pub const ALL: [ApiStatus; 6] = [
        Self::BadRequest,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::TooManyRequests,
        Self::InternalServerError,
    ];

    /// Numeric HTTP status code.
    pub const fn code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::TooManyRequests => 429,
            Self::InternalServerError => 500,
        }
    }

    /// Message used when an error is built without an explicit one.
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not found",
            Self::TooManyRequests => "You are being rate limited",
            Self::InternalServerError => "Internal server error",
        }
    }

    pub fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A numeric status outside the [`ApiStatus`] table.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown error code: {0}")]
pub struct UnknownStatusCode(pub u16);

impl TryFrom<u16> for ApiStatus {
    type Error = UnknownStatusCode;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == code)
            .ok_or(UnknownStatusCode(code))
    }
}

/// Failure surfaced to an API caller.
///
/// Immutable once built. Renders as `{ "message": ... }` with the HTTP status
/// set to [`ApiError::status`], and leaves a copy of itself in the response
/// extensions so the reporting middleware can forward it to the error sink.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} {}", .status.code(), .message)]
pub struct ApiError {
    status: ApiStatus,
    message: String,
}

impl ApiError {
    /// Creates an error carrying the default message for `status`.
    pub fn new(status: ApiStatus) -> Self {
        Self {
            status,
            message: status.default_message().to_string(),
        }
    }

    /// Creates an error with a caller-supplied message.
    pub fn with_message(status: ApiStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates an error from a raw numeric code.
    ///
    /// # Returns
    /// - `Ok(ApiError)` - The code is in the status table
    /// - `Err(UnknownStatusCode)` - The code is not a supported failure status
    pub fn from_code(code: u16) -> Result<Self, UnknownStatusCode> {
        ApiStatus::try_from(code).map(Self::new)
    }

    pub fn status(&self) -> ApiStatus {
        self.status
    }

    pub fn code(&self) -> u16 {
        self.status.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for ApiError {
    fn default() -> Self {
        Self::new(ApiStatus::default())
    }
}

impl From<ApiStatus> for ApiError {
    fn from(status: ApiStatus) -> Self {
        Self::new(status)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status.status_code();
        let body = Json(ErrorDto {
            message: self.message.clone(),
        });

        let mut response = (status, body).into_response();
        response.extensions_mut().insert(self);

        response
    }
}
