use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::server::error::{auth::AuthError, AppError};

/// Access key the dashboard received from the OAuth callback.
///
/// Read from the `Authorization` header, either bare or with a `Bearer ` prefix.
/// Rejects with 401 when the header is missing or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessKey(pub String);

impl<S: Send + Sync> FromRequestParts<S> for AccessKey {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let key = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.strip_prefix("Bearer ").unwrap_or(value).trim())
            .filter(|value| !value.is_empty())
            .ok_or(AuthError::MissingAccessKey)?;

        Ok(Self(key.to_string()))
    }
}
