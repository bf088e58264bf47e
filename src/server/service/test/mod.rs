use chrono::{DateTime, Duration, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

use crate::server::{
    data::user::UserRepository,
    error::{vote::VoteError, AppError},
    service::oauth::DiscordIdentity,
};

mod vote;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap()
}

fn voter(discord_id: u64) -> DiscordIdentity {
    DiscordIdentity {
        discord_id,
        name: format!("Voter {}", discord_id),
    }
}
