use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::query::QueryParams,
    service::auth::AuthService,
    state::AppState,
    util::redirect::dashboard_auth_url,
};

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct AuthParams {
    /// Authorization code from Discord for token exchange.
    pub code: Option<String>,
}

/// GET /login - Redirect to Discord's OAuth2 consent screen
///
/// # Returns
/// - `307 Temporary Redirect`: to the authorization URL
pub async fn login(State(state): State<AppState>) -> impl IntoResponse {
    let url = state.auth.authorization_url();

    Redirect::temporary(url.as_str())
}

/// GET /auth?code=... - OAuth2 callback
///
/// Exchanges the authorization code for an access key, stores the user, grants
/// the dev role (best-effort) and sends the user back to the dashboard with the
/// key.
///
/// # Returns
/// - `307 Temporary Redirect`: to `<dashboard>/auth?key=<key>`
/// - `400 Bad Request`: Malformed query string
/// - `401 Unauthorized`: Missing or rejected code
/// - `500 Internal Server Error`: Database or Discord failure
pub async fn auth(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<AuthParams>,
) -> Result<impl IntoResponse, AppError> {
    let code = params
        .code
        .filter(|code| !code.is_empty())
        .ok_or(AuthError::MissingAuthorizationCode)?;

    let auth_service = AuthService::new(
        &state.db,
        state.auth.as_ref(),
        state.guild_actions.as_ref(),
    );
    let key = auth_service.callback(&code).await?;

    let url = dashboard_auth_url(&state.dashboard_url, &key)?;

    Ok(Redirect::temporary(url.as_str()))
}
