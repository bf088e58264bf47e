//! Vote eligibility policy and vote recording.
//!
//! [`validate_can_vote`] is the pure decision over a user's last vote time.
//! [`VoteService`] combines it with the repository's atomic check-and-set so the
//! read-decide-write sequence cannot let two concurrent votes through.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{vote::VoteError, AppError},
    model::user::UpsertUserParam,
    service::oauth::DiscordIdentity,
};

/// Minimum time between two votes from the same user.
pub const VOTE_COOLDOWN: Duration = Duration::hours(12);

/// Decides whether a user may vote at `now`.
///
/// A user who never voted may always vote. Otherwise the vote is allowed once at
/// least [`VOTE_COOLDOWN`] has elapsed since `last_voted_at`, the boundary itself
/// included. A `last_voted_at` later than `now` counts as a vote made just now, so
/// the user waits one full cooldown.
///
/// # Arguments
/// - `last_voted_at` - Time of the user's previous vote, if any
/// - `now` - Current time
///
/// # Returns
/// - `Ok(())` - Vote allowed
/// - `Err(VoteError::RateLimited)` - Still in cooldown, with the strictly positive
///   time left
pub fn validate_can_vote(
    last_voted_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<(), VoteError> {
    let Some(last_voted_at) = last_voted_at else {
        return Ok(());
    };

    let mut elapsed = now.signed_duration_since(last_voted_at);
    if elapsed < Duration::zero() {
        tracing::warn!(
            "Last vote at {} is later than current time {}",
            last_voted_at,
            now
        );
        elapsed = Duration::zero();
    }

    if elapsed >= VOTE_COOLDOWN {
        return Ok(());
    }

    Err(VoteError::RateLimited {
        retry_after: VOTE_COOLDOWN - elapsed,
    })
}

pub struct VoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoteService<'a> {
    /// Creates a new VoteService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `VoteService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a vote for `voter` at `now`.
    ///
    /// Upserts the voter, rejects early with the exact remaining cooldown when the
    /// stored vote time is too recent, then records the vote with a conditional
    /// update. Losing that update to a concurrent request means a vote was recorded
    /// just now, so the voter waits a full cooldown.
    ///
    /// # Arguments
    /// - `voter` - Discord identity of the voting user
    /// - `now` - Time of the vote
    ///
    /// # Returns
    /// - `Ok(())` - Vote recorded
    /// - `Err(AppError::VoteErr)` - Voter is within the cooldown window
    /// - `Err(AppError::DbErr)` - Database error reading or writing the user
    pub async fn vote(&self, voter: &DiscordIdentity, now: DateTime<Utc>) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .upsert(UpsertUserParam {
                discord_id: voter.discord_id,
                name: voter.name.clone(),
            })
            .await?;

        if let Err(err) = validate_can_vote(user.last_voted_at, now) {
            tracing::debug!(
                "Rejected vote from user {}, retry after {}s",
                user.discord_id,
                err.retry_after().num_seconds()
            );
            return Err(err.into());
        }

        if !user_repo
            .try_record_vote(user.discord_id, now, VOTE_COOLDOWN)
            .await?
        {
            tracing::debug!(
                "Concurrent vote already recorded for user {}",
                user.discord_id
            );
            return Err(VoteError::RateLimited {
                retry_after: VOTE_COOLDOWN,
            }
            .into());
        }

        tracing::info!("Recorded vote for user {}", user.discord_id);

        Ok(())
    }
}
