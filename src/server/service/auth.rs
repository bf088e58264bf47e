use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::UpsertUserParam,
    service::{guild::GuildActions, oauth::AuthGateway},
};

/// Orchestrates the OAuth callback: code exchange, user record, dev role.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    auth: &'a dyn AuthGateway,
    guild_actions: &'a dyn GuildActions,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `auth` - Authorization server used for the code exchange
    /// - `guild_actions` - Bot actions used to grant the dev role
    pub fn new(
        db: &'a DatabaseConnection,
        auth: &'a dyn AuthGateway,
        guild_actions: &'a dyn GuildActions,
    ) -> Self {
        Self {
            db,
            auth,
            guild_actions,
        }
    }

    /// Handles the OAuth callback for `code`.
    ///
    /// Exchanges the code, upserts the user and grants them the dev role. The role
    /// grant is best-effort: its outcome is logged by the gateway and does not change
    /// the result of the callback.
    ///
    /// # Arguments
    /// - `code` - Authorization code from the callback query
    ///
    /// # Returns
    /// - `Ok(String)` - Access key to hand to the dashboard
    /// - `Err(AppError::AuthErr)` - The code exchange failed
    /// - `Err(AppError::DbErr)` - Database error during user upsert
    pub async fn callback(&self, code: &str) -> Result<String, AppError> {
        let authorized = self.auth.exchange_code(code).await?;
        let identity = authorized.identity;

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                discord_id: identity.discord_id,
                name: identity.name,
            })
            .await?;

        tracing::info!("User {} ({}) authorized", user.name, user.discord_id);

        let _ = self.guild_actions.grant_role(user.discord_id).await;

        Ok(authorized.key)
    }
}
