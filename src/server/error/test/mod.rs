use axum::{
    body::to_bytes,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Duration;

use crate::{
    model::api::ErrorDto,
    server::error::{
        api::{ApiError, ApiStatus, UnknownStatusCode},
        auth::AuthError,
        vote::VoteError,
        AppError,
    },
};


async fn error_body(response: Response) -> ErrorDto {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
