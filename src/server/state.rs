//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the database pool and the
//! collaborators handlers talk to. The state is built once during startup and cloned
//! for each request through Axum's state extraction. Collaborators are trait objects
//! so tests can swap in mocks.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::{guild::GuildActions, oauth::AuthGateway, report::ErrorReporter};

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// collaborators are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Authorization server used for login, code exchange and key lookup.
    pub auth: Arc<dyn AuthGateway>,

    /// Best-effort privileged actions in the configured guild.
    pub guild_actions: Arc<dyn GuildActions>,

    /// Sink every failure response is reported to.
    pub error_reporter: Arc<dyn ErrorReporter>,

    /// Dashboard base URL the OAuth callback redirects to.
    pub dashboard_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `auth` - Authorization server gateway
    /// - `guild_actions` - Guild action gateway
    /// - `error_reporter` - Error reporting sink
    /// - `dashboard_url` - Dashboard base URL
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        auth: Arc<dyn AuthGateway>,
        guild_actions: Arc<dyn GuildActions>,
        error_reporter: Arc<dyn ErrorReporter>,
        dashboard_url: String,
    ) -> Self {
        Self {
            db,
            auth,
            guild_actions,
            error_reporter,
            dashboard_url,
        }
    }
}
