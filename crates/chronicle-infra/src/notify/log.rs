//! Log notifier - used when no webhook is configured.

use async_trait::async_trait;

use chronicle_core::ports::{Notifier, NotifyError, PostCreated};

pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn post_created(&self, event: &PostCreated) -> Result<(), NotifyError> {
        tracing::info!(
            title = %event.title,
            category = %event.category,
            pub_date = %event.pub_date,
            "New post created"
        );
        Ok(())
    }
}
