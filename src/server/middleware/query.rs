use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::server::error::{
    api::{ApiError, ApiStatus},
    AppError,
};

/// Query string extractor that rejects through the API error envelope.
///
/// Behaves like axum's [`Query`], but a query string that does not deserialize
/// into `T` becomes a 400 `{ "message": "Bad request" }` that is reported like
/// any other failure. The deserializer's message is only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected query string for {}: {}", parts.uri.path(), rejection);
                ApiError::new(ApiStatus::BadRequest)
            })?;

        Ok(Self(params))
    }
}
