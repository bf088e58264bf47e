//! OAuth2 login with Discord.
//!
//! [`AuthGateway`] is the narrow interface the controllers use to reach the
//! authorization server: build the login link, exchange a callback code for an
//! access key, and resolve an access key back to a Discord user.

use async_trait::async_trait;
use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use reqwest::StatusCode;
use serenity::all::User as DiscordUser;
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    state::OAuth2Client,
};

const DISCORD_CURRENT_USER_URL: &str = "https://discord.com/api/users/@me";

/// Discord user an access key belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscordIdentity {
    pub discord_id: u64,
    pub name: String,
}

/// Result of a successful authorization code exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedUser {
    /// Access key handed to the dashboard.
    pub key: String,
    pub identity: DiscordIdentity,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// URL of the consent screen the login route redirects to.
    fn authorization_url(&self) -> Url;

    /// Exchanges an authorization code for an access key and its owner.
    async fn exchange_code(&self, code: &str) -> Result<AuthorizedUser, AppError>;

    /// Resolves an access key to the Discord user it was issued for.
    async fn identify(&self, key: &str) -> Result<DiscordIdentity, AppError>;
}

/// [`AuthGateway`] backed by Discord's OAuth2 endpoints.
pub struct DiscordAuthGateway {
    http_client: reqwest::Client,
    oauth_client: OAuth2Client,
}

impl DiscordAuthGateway {
    pub fn new(http_client: reqwest::Client, oauth_client: OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
        }
    }
}

#[async_trait]
impl AuthGateway for DiscordAuthGateway {
    fn authorization_url(&self) -> Url {
        // No session to keep the CSRF state in, so the token is not checked on callback
        let (authorize_url, _csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url();

        authorize_url
    }

    async fn exchange_code(&self, code: &str) -> Result<AuthorizedUser, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let key = token.access_token().secret().clone();
        let identity = self.identify(&key).await?;

        Ok(AuthorizedUser { key, identity })
    }

    async fn identify(&self, key: &str) -> Result<DiscordIdentity, AppError> {
        let response = self
            .http_client
            .get(DISCORD_CURRENT_USER_URL)
            .header("Authorization", format!("Bearer {}", key))
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidAccessKey.into());
        }

        let user = response.error_for_status()?.json::<DiscordUser>().await?;

        Ok(DiscordIdentity {
            discord_id: user.id.get(),
            name: user.name,
        })
    }
}
