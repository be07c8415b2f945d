//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod notify;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use notify::{Notifier, NotifyError, PostCreated};
pub use repository::{
    BaseRepository, CategoryRepository, CommentRepository, PostRepository, UserRepository,
};
