//! Business logic and the collaborator interfaces the controllers call through.
//!
//! - `vote` - vote eligibility policy and vote recording
//! - `auth` - OAuth callback orchestration
//! - `oauth` - [`oauth::AuthGateway`], the authorization server interface
//! - `guild` - [`guild::GuildActions`], best-effort privileged bot actions
//! - `report` - [`report::ErrorReporter`], the error reporting sink

pub mod auth;
pub mod guild;
pub mod oauth;
pub mod report;
pub mod vote;

#[cfg(test)]
mod test;
