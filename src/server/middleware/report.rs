use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::server::{error::api::ApiError, state::AppState};

/// Reports every failure response to the configured error sink.
///
/// Failure responses carry their [`ApiError`] in the response extensions. The
/// report is awaited before the response is returned, and a failing reporter is
/// logged without affecting the response.
pub async fn report_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let origin_path = request
        .uri()
        .path_and_query()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;

    let failure = response.extensions().get::<ApiError>().cloned();
    if let Some(error) = failure {
        if let Err(e) = state
            .error_reporter
            .report(error.code(), error.message(), &origin_path)
            .await
        {
            tracing::warn!("Failed to report error for {}: {}", origin_path, e);
        }
    }

    response
}
