//! Request/response middleware and request guards.

pub mod auth;
pub mod panic;
pub mod query;
pub mod report;
