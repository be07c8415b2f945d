//! Webhook notifier - posts the event as JSON to a configured URL.

use async_trait::async_trait;

use chronicle_core::ports::{Notifier, NotifyError, PostCreated};

pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn post_created(&self, event: &PostCreated) -> Result<(), NotifyError> {
        self.client
            .post(&self.url)
            .json(event)
            .send()
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?
            .error_for_status()
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        Ok(())
    }
}
