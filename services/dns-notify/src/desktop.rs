//! Desktop popup via an external notification command

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::DesktopConfig;
use crate::io::CommandRunner;
use crate::notifier::Notifier;

/// Raises a desktop notification with e.g. `notify-send`
pub struct DesktopNotifier {
    command: String,
    title: String,
    runner: Arc<dyn CommandRunner>,
}

impl std::fmt::Debug for DesktopNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopNotifier")
            .field("command", &self.command)
            .field("title", &self.title)
            .finish()
    }
}

impl DesktopNotifier {
    pub fn new(config: &DesktopConfig, runner: Arc<dyn CommandRunner>) -> Self {
        tracing::debug!("Created DesktopNotifier using '{}'", config.command);

        Self {
            command: config.command.clone(),
            title: config.title.clone(),
            runner,
        }
    }
}

#[async_trait]
impl Notifier for DesktopNotifier {
    fn type_name(&self) -> &str {
        "desktop"
    }

    /// Failures are logged and swallowed; the host was already found.
    async fn notify(&self, host: &str, _elapsed: Duration) -> crate::Result<()> {
        let args = vec![self.title.clone(), format!("Host {} is found!", host)];

        if let Err(e) = self.runner.run(&self.command, &args).await {
            tracing::error!("Error executing command: {}", e);
            return Ok(());
        }

        tracing::debug!("Desktop notification sent for {}", host);
        Ok(())
    }
}
