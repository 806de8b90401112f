//! Webhook notification client

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::io::HttpClient;
use crate::notifier::{Notifier, WebhookPayload};

/// POSTs a [`WebhookPayload`] to a configured URL
pub struct WebhookNotifier {
    url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for WebhookNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookNotifier")
            .field("url", &self.url)
            .finish()
    }
}

impl WebhookNotifier {
    /// `url` must already carry a scheme, see [`crate::config::ensure_scheme`]
    pub fn new(url: String, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created WebhookNotifier for {}", url);
        Self { url, http }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    fn type_name(&self) -> &str {
        "webhook"
    }

    async fn notify(&self, host: &str, elapsed: Duration) -> crate::Result<()> {
        let payload = WebhookPayload::new(host, elapsed);
        let body = serde_json::to_value(&payload)?;

        let response = self.http.post_json(&self.url, &body).await?;

        if !(200..300).contains(&response.status) {
            tracing::warn!(
                "Webhook {} answered with status {}: {}",
                self.url,
                response.status,
                response.body
            );
        }

        tracing::info!("Webhook {} has been notified", self.url);
        Ok(())
    }
}
