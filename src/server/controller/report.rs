use axum::extract::{OriginalUri, State};
use serde::Deserialize;

use crate::{
    model::api::DefaultApiResponse,
    server::{
        error::{
            api::{ApiError, ApiStatus},
            AppError,
        },
        middleware::query::QueryParams,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct ErrorReportParams {
    /// Error message raised by the dashboard.
    pub message: Option<String>,
}

/// POST /error?message=... - Forward a dashboard error to the error sink
///
/// # Returns
/// - `200 OK`: `{ "code": 200, "message": "Error reported" }`, also when the sink
///   fails to record the report
/// - `400 Bad Request`: Missing or blank message, or malformed query string
pub async fn report_error(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    QueryParams(params): QueryParams<ErrorReportParams>,
) -> Result<DefaultApiResponse, AppError> {
    let message = params
        .message
        .filter(|message| !message.trim().is_empty())
        .ok_or(ApiError::new(ApiStatus::BadRequest))?;

    if let Err(e) = state
        .error_reporter
        .report(
            ApiStatus::InternalServerError.code(),
            &message,
            uri.path(),
        )
        .await
    {
        tracing::warn!("Failed to forward dashboard error: {}", e);
    }

    Ok(DefaultApiResponse::success("Error reported"))
}
