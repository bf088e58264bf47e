//! Wire-level DTOs shared by every route.

pub mod api;
