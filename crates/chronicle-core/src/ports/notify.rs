//! Outbound notification port.
//!
//! Post creation announces itself to an external sink. Delivery is
//! best-effort: callers spawn it off the request path and swallow failures.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Payload announced when a post is created.
#[derive(Debug, Clone, Serialize)]
pub struct PostCreated {
    pub title: String,
    pub category: String,
    pub pub_date: DateTime<Utc>,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn post_created(&self, event: &PostCreated) -> Result<(), NotifyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Delivery failed: {0}")]
    Delivery(String),
}
