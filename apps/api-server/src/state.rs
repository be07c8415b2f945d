//! Application state - shared across all handlers.

use std::sync::Arc;

use chronicle_core::domain::Location;
use chronicle_core::ports::{
    BaseRepository, CategoryRepository, CommentRepository, Notifier, PostRepository,
    UserRepository,
};
use chronicle_infra::database::{
    DatabaseConnections, PostgresCategoryRepository, PostgresCommentRepository,
    PostgresLocationRepository, PostgresPostRepository, PostgresUserRepository,
};
use uuid::Uuid;
use chronicle_infra::notify::{LogNotifier, WebhookNotifier};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub locations: Arc<dyn BaseRepository<Location, Uuid>>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Result<Self, String> {
        let Some(db_config) = &config.database else {
            return Err("DATABASE_URL not set".to_string());
        };

        let connections = DatabaseConnections::init(db_config)
            .await
            .map_err(|e| format!("Failed to connect to database: {e}"))?;

        let notifier: Arc<dyn Notifier> = match &config.notify_webhook_url {
            Some(url) => Arc::new(WebhookNotifier::new(url.clone())),
            None => Arc::new(LogNotifier),
        };

        tracing::info!("Application state initialized");

        Ok(Self {
            users: Arc::new(PostgresUserRepository::new(connections.main.clone())),
            categories: Arc::new(PostgresCategoryRepository::new(connections.main.clone())),
            locations: Arc::new(PostgresLocationRepository::new(connections.main.clone())),
            posts: Arc::new(PostgresPostRepository::new(connections.main.clone())),
            comments: Arc::new(PostgresCommentRepository::new(connections.main)),
            notifier,
        })
    }
}
