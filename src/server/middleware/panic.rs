use axum::response::{IntoResponse, Response};
use std::any::Any;

use crate::server::error::api::{ApiError, ApiStatus};

/// Renders a panicking handler as a 500 failure.
///
/// Used with `CatchPanicLayer::custom`. The panic payload only reaches the logs;
/// the client sees the generic message and the failure is reported like any other.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    tracing::error!("Request handler panicked: {}", detail);

    ApiError::new(ApiStatus::InternalServerError).into_response()
}
