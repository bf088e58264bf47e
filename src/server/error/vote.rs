use chrono::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteError {
    /// The user voted within the cooldown window.
    ///
    /// `retry_after` is the time left until the next vote is accepted and is
    /// always strictly positive.
    #[error("Vote cooldown active, {} seconds remaining", .retry_after.num_seconds())]
    RateLimited { retry_after: Duration },
}

impl VoteError {
    pub fn retry_after(&self) -> Duration {
        match self {
            Self::RateLimited { retry_after } => *retry_after,
        }
    }
}
