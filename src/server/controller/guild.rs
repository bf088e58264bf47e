use axum::extract::State;

use crate::{
    model::api::DefaultApiResponse,
    server::{error::AppError, middleware::auth::AccessKey, state::AppState},
};

/// DELETE /guild/member - Remove the key's owner from the guild
///
/// The removal is best-effort: once the caller is identified the response is the
/// same whether or not Discord accepted the kick.
///
/// # Authentication
/// `Authorization` header holding the access key issued by `/auth`
///
/// # Returns
/// - `200 OK`: `{ "code": 200, "message": "Success" }`
/// - `401 Unauthorized`: Missing or rejected access key
pub async fn leave(
    State(state): State<AppState>,
    AccessKey(key): AccessKey,
) -> Result<DefaultApiResponse, AppError> {
    let member = state.auth.identify(&key).await?;

    let _ = state.guild_actions.remove_member(member.discord_id).await;

    Ok(DefaultApiResponse::success("Success"))
}
