//! # Chronicle Infrastructure
//!
//! Concrete implementations of the ports defined in `chronicle-core`:
//! SeaORM repositories over PostgreSQL, JWT and Argon2 authentication,
//! and the outbound post-creation notifier.

pub mod auth;
pub mod database;
pub mod notify;

pub use auth::{Argon2PasswordService, JwtTokenService};
pub use database::DatabaseConnections;
pub use notify::{LogNotifier, WebhookNotifier};
