use axum::http::{HeaderValue, Method};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use serenity::{
    all::{ChannelId, GuildId, RoleId},
    http::Http,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::{
        guild::SerenityGuildActions,
        report::{DiscordErrorReporter, ErrorReporter, LogErrorReporter},
    },
    state::OAuth2Client,
};

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG` when set, otherwise `info` with serenity's
/// chatter limited to warnings.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,serenity=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for OAuth and Discord API requests.
///
/// Redirects are disabled so a response can never steer the client to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the Discord OAuth2 client from configuration.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorization, token and redirect URLs set
/// - `Err(AppError::ConfigErr)` - One of the configured URLs does not parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid = |name: &str, value: &str| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    };

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.discord_auth_url.clone())
                .map_err(|_| invalid("DISCORD_AUTH_URL", &config.discord_auth_url))?,
        )
        .set_token_uri(
            TokenUrl::new(config.discord_token_url.clone())
                .map_err(|_| invalid("DISCORD_TOKEN_URL", &config.discord_token_url))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone())
                .map_err(|_| invalid("DISCORD_REDIRECT_URL", &config.discord_redirect_url))?,
        );

    Ok(client)
}

/// Creates the Discord HTTP client authenticated as the bot.
pub fn setup_discord_http(config: &Config) -> Arc<Http> {
    Arc::new(Http::new(&config.discord_bot_token))
}

/// Creates the guild action gateway for the configured guild and dev role.
pub fn setup_guild_actions(config: &Config, discord_http: Arc<Http>) -> SerenityGuildActions {
    SerenityGuildActions::new(
        discord_http,
        GuildId::new(config.guild_id),
        RoleId::new(config.dev_role_id),
    )
}

/// Selects the error reporter.
///
/// Posts to Discord when `ERROR_CHANNEL_ID` is configured, otherwise only logs.
pub fn setup_error_reporter(config: &Config, discord_http: Arc<Http>) -> Arc<dyn ErrorReporter> {
    match config.error_channel_id {
        Some(channel_id) => {
            tracing::info!("Reporting API errors to channel {}", channel_id);
            Arc::new(DiscordErrorReporter::new(
                discord_http,
                ChannelId::new(channel_id),
            ))
        }
        None => Arc::new(LogErrorReporter),
    }
}

/// Allows the dashboard origin to call the API from the browser.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(config.dashboard_url.trim_end_matches('/')).map_err(|_| {
        ConfigError::InvalidEnvVar {
            name: "DASHBOARD_URL".to_string(),
            value: config.dashboard_url.clone(),
        }
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([axum::http::header::AUTHORIZATION]))
}
