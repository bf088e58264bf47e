use crate::server::{data::user::UserRepository, model::user::UpsertUserParam};
use chrono::{Duration, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

use crate::server::error::AppError;

mod find_by_discord_id;
mod try_record_vote;
mod upsert;
