//! Privileged guild actions performed by the bot.
//!
//! Both actions are best-effort. A failure (unknown member, missing permission,
//! network error) is logged and returned as [`ActionOutcome::Failed`]; callers are
//! free to ignore the outcome and carry on as if the action succeeded.

use async_trait::async_trait;
use serenity::{
    all::{GuildId, RoleId, UserId},
    http::Http,
};
use std::sync::Arc;

/// Audit log reason attached to the dev role grant.
const GRANT_ROLE_REASON: &str = "Added bot.";

/// Outcome of a best-effort guild action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// The action failed; holds the reason for logs and tests.
    Failed(String),
}

impl ActionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuildActions: Send + Sync {
    /// Grants the configured dev role to `user_id`.
    async fn grant_role(&self, user_id: u64) -> ActionOutcome;

    /// Removes `user_id` from the configured guild.
    async fn remove_member(&self, user_id: u64) -> ActionOutcome;
}

/// [`GuildActions`] performed through the bot's Discord HTTP client.
pub struct SerenityGuildActions {
    http: Arc<Http>,
    guild_id: GuildId,
    dev_role_id: RoleId,
}

impl SerenityGuildActions {
    /// Creates the gateway for one guild and role.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client authenticated as the bot
    /// - `guild_id` - Guild the actions apply to
    /// - `dev_role_id` - Role granted by `grant_role`
    pub fn new(http: Arc<Http>, guild_id: GuildId, dev_role_id: RoleId) -> Self {
        Self {
            http,
            guild_id,
            dev_role_id,
        }
    }
}

#[async_trait]
impl GuildActions for SerenityGuildActions {
    async fn grant_role(&self, user_id: u64) -> ActionOutcome {
        let Some(user) = user_id_from(user_id) else {
            return failed("grant role", user_id, "invalid user ID");
        };

        match self
            .http
            .add_member_role(self.guild_id, user, self.dev_role_id, Some(GRANT_ROLE_REASON))
            .await
        {
            Ok(()) => {
                tracing::info!(
                    "Granted role {} to user {} in guild {}",
                    self.dev_role_id,
                    user_id,
                    self.guild_id
                );
                ActionOutcome::Completed
            }
            Err(e) => failed("grant role", user_id, e),
        }
    }

    async fn remove_member(&self, user_id: u64) -> ActionOutcome {
        let Some(user) = user_id_from(user_id) else {
            return failed("remove member", user_id, "invalid user ID");
        };

        match self.http.kick_member(self.guild_id, user, None).await {
            Ok(()) => {
                tracing::info!("Removed user {} from guild {}", user_id, self.guild_id);
                ActionOutcome::Completed
            }
            Err(e) => failed("remove member", user_id, e),
        }
    }
}

/// Discord IDs are non-zero; serenity panics on zero.
fn user_id_from(user_id: u64) -> Option<UserId> {
    (user_id != 0).then(|| UserId::new(user_id))
}

fn failed(action: &str, user_id: u64, reason: impl std::fmt::Display) -> ActionOutcome {
    tracing::warn!("Failed to {} for user {}: {}", action, user_id, reason);
    ActionOutcome::Failed(reason.to_string())
}
