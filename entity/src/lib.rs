//! SeaORM entity definitions for the gateway database.

pub mod prelude;

pub mod user;
