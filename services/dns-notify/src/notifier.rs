//! Notifier trait and variant selection

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::{Config, NotificationMode};
use crate::desktop::DesktopNotifier;
use crate::io::{CommandRunner, HttpClient};
use crate::webhook::WebhookNotifier;

/// JSON body POSTed to the webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub host: String,
    /// Time from startup until the host was found, e.g. `"4s 2ms"`
    pub time: String,
}

impl WebhookPayload {
    pub fn new(host: &str, elapsed: Duration) -> Self {
        Self {
            host: host.to_string(),
            time: format_elapsed(elapsed),
        }
    }
}

/// Render an elapsed duration for humans, truncated to milliseconds
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    humantime::format_duration(Duration::from_millis(millis)).to_string()
}

/// Trait for telling someone the host is up
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Get the notifier type name (e.g. "webhook")
    fn type_name(&self) -> &str;

    /// Announce that `host` became reachable after `elapsed`
    async fn notify(&self, host: &str, elapsed: Duration) -> crate::Result<()>;
}

/// Build the notifier selected by the configuration
pub fn build_notifier(
    config: &Config,
    http: Arc<dyn HttpClient>,
    runner: Arc<dyn CommandRunner>,
) -> Arc<dyn Notifier> {
    match config.notification_mode() {
        NotificationMode::Webhook { url } => Arc::new(WebhookNotifier::new(url, http)),
        NotificationMode::Desktop => Arc::new(DesktopNotifier::new(&config.desktop, runner)),
    }
}
