use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::server::{
    controller::{
        auth::{auth, login},
        guild::leave,
        index::{hello, not_found},
        report::report_error,
        vote::vote,
    },
    middleware::{panic::handle_panic, report::report_errors},
    state::AppState,
};

/// Builds the gateway's routes.
///
/// Unknown paths and unsupported methods both fall through to a 404. A panicking
/// handler becomes a 500. The error reporting layer wraps every route, both
/// fallbacks and the panic handler.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/auth", get(auth))
        .route("/login", get(login))
        .route("/error", post(report_error))
        .route("/vote", post(vote))
        .route("/guild/member", delete(leave))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn_with_state(state.clone(), report_errors))
        .with_state(state)
}
