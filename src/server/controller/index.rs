use axum::{response::IntoResponse, Json};

use crate::{
    model::api::HelloDto,
    server::error::api::{ApiError, ApiStatus},
};

/// GET / - Liveness greeting
///
/// # Returns
/// - `200 OK`: `{ "hello": "earth" }`
pub async fn hello() -> impl IntoResponse {
    Json(HelloDto {
        hello: "earth".to_string(),
    })
}

/// Fallback for every unknown path or unsupported method.
///
/// # Returns
/// - `404 Not Found`: `{ "message": "Not found" }`
pub async fn not_found() -> ApiError {
    ApiError::new(ApiStatus::NotFound)
}
