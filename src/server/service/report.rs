//! Error reporting sink.
//!
//! Every failure response is handed to an [`ErrorReporter`] before it leaves the
//! server. Reporting is best-effort: callers log a reporter error and move on.

use async_trait::async_trait;
use serenity::{
    all::{ChannelId, Colour, CreateEmbed, CreateMessage, Timestamp},
    http::Http,
};
use std::sync::Arc;

use crate::server::error::AppError;

/// Embed colour of error reports.
const ERROR_COLOUR: Colour = Colour::new(0xf54242);

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ErrorReporter: Send + Sync {
    /// Records a failure.
    ///
    /// # Arguments
    /// - `status` - HTTP status of the failure
    /// - `message` - Message returned to the caller
    /// - `origin_path` - Path and query of the request that failed
    async fn report(&self, status: u16, message: &str, origin_path: &str) -> Result<(), AppError>;
}

/// Writes reports to the application log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogErrorReporter;

#[async_trait]
impl ErrorReporter for LogErrorReporter {
    async fn report(&self, status: u16, message: &str, origin_path: &str) -> Result<(), AppError> {
        tracing::error!(status, origin_path, "API error: {}", message);
        Ok(())
    }
}

/// Logs reports and posts them as embeds to a Discord channel.
pub struct DiscordErrorReporter {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl DiscordErrorReporter {
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl ErrorReporter for DiscordErrorReporter {
    async fn report(&self, status: u16, message: &str, origin_path: &str) -> Result<(), AppError> {
        LogErrorReporter.report(status, message, origin_path).await?;

        let embed = CreateEmbed::new()
            .title(format!("{} {}", status, origin_path))
            .description(format!("```{}```", message))
            .colour(ERROR_COLOUR)
            .timestamp(Timestamp::now());

        self.channel_id
            .send_message(self.http.as_ref(), CreateMessage::new().embed(embed))
            .await?;

        Ok(())
    }
}
