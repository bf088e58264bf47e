//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for
//! customization and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//!
//! let voter = factory::user::UserFactory::new(&db)
//!     .discord_id("987654321")
//!     .last_voted_at(Utc::now() - Duration::hours(3))
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod user;

pub use user::create_user;
