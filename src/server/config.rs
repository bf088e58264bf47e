use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub discord_bot_token: String,
    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    /// Guild the bot grants roles in and removes members from.
    pub guild_id: u64,
    /// Role granted to users who authorize through the dashboard.
    pub dev_role_id: u64,
    /// Channel receiving error reports, logging only when unset.
    pub error_channel_id: Option<u64>,

    pub dashboard_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A variable is missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let dashboard_url = required("DASHBOARD_URL")?;
        Url::parse(&dashboard_url).map_err(|_| ConfigError::InvalidEnvVar {
            name: "DASHBOARD_URL".to_string(),
            value: dashboard_url.clone(),
        })?;

        let error_channel_id = match lookup("ERROR_CHANNEL_ID").filter(|v| !v.is_empty()) {
            Some(value) => Some(parse_snowflake("ERROR_CHANNEL_ID", value)?),
            None => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: lookup("BIND_ADDRESS")
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            guild_id: parse_snowflake("GUILD_ID", required("GUILD_ID")?)?,
            dev_role_id: parse_snowflake("DEV_ROLE_ID", required("DEV_ROLE_ID")?)?,
            error_channel_id,
            dashboard_url,
        })
    }
}

/// Parses a Discord ID, which must be a non-zero integer.
fn parse_snowflake(name: &str, value: String) -> Result<u64, ConfigError> {
    match value.parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
