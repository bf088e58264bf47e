//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Besides the usual upsert and lookup it owns the vote check-and-set: the only write
//! path for `last_voted_at`, performed as a single conditional update so concurrent
//! requests for the same user cannot both record a vote.

use chrono::{DateTime, Duration, Utc};
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter,
};

use crate::server::{
    error::AppError,
    model::user::{UpsertUserParam, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user from parameter model.
    ///
    /// Inserts a new user or updates an existing user's name. The vote timestamp and
    /// creation time of an existing user are left untouched.
    ///
    /// # Arguments
    /// - `param` - User upsert parameters including discord_id and name
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_column(entity::user::Column::Name)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by their Discord ID.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID as u64
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user found with that Discord ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Records a vote at `now` if the user is outside the cooldown window.
    ///
    /// Performs the eligibility check and the write as one conditional UPDATE, so of
    /// several concurrent calls for the same user at most one succeeds. A user whose
    /// last vote is exactly `cooldown` old is eligible.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID of the voting user
    /// - `now` - Time to record as the vote time
    /// - `cooldown` - Minimum time between two votes
    ///
    /// # Returns
    /// - `Ok(true)` - Vote recorded
    /// - `Ok(false)` - User unknown or still within the cooldown window
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn try_record_vote(
        &self,
        discord_id: u64,
        now: DateTime<Utc>,
        cooldown: Duration,
    ) -> Result<bool, AppError> {
        let eligible_before = now - cooldown;

        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::LastVotedAt, Expr::value(now))
            .filter(entity::user::Column::DiscordId.eq(discord_id.to_string()))
            .filter(
                Condition::any()
                    .add(entity::user::Column::LastVotedAt.is_null())
                    .add(entity::user::Column::LastVotedAt.lte(eligible_before)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
