use axum::extract::State;
use chrono::Utc;

use crate::{
    model::api::DefaultApiResponse,
    server::{
        error::AppError, middleware::auth::AccessKey, service::vote::VoteService,
        state::AppState,
    },
};

/// POST /vote - Cast a vote for the user owning the access key
///
/// # Authentication
/// `Authorization` header holding the access key issued by `/auth`
///
/// # Returns
/// - `200 OK`: `{ "code": 200, "message": "Vote recorded" }`
/// - `401 Unauthorized`: Missing or rejected access key
/// - `429 Too Many Requests`: Voted within the last 12 hours, with `Retry-After`
pub async fn vote(
    State(state): State<AppState>,
    AccessKey(key): AccessKey,
) -> Result<DefaultApiResponse, AppError> {
    let voter = state.auth.identify(&key).await?;

    VoteService::new(&state.db).vote(&voter, Utc::now()).await?;

    Ok(DefaultApiResponse::success("Vote recorded"))
}
