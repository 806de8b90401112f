//! Scheduler: polls the prober until the host answers, then notifies once

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::notifier::{format_elapsed, Notifier};
use crate::prober::Prober;

/// What happened during a completed polling run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOutcome {
    /// Number of probes issued, including the successful one
    pub attempts: u64,
    /// Time from `start` until the host was found
    pub elapsed: Duration,
}

/// Sequential poll loop for a single host
#[derive(Debug)]
pub struct Scheduler {
    host: String,
    interval: Duration,
    prober: Prober,
    notifier: Arc<dyn Notifier>,
}

impl Scheduler {
    pub fn new(
        host: impl Into<String>,
        interval: Duration,
        prober: Prober,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            host: host.into(),
            interval,
            prober,
            notifier,
        }
    }

    /// Probe until the host is reachable, then invoke the notifier.
    ///
    /// Never gives up on its own. The only error is one returned by the
    /// notifier after the host was found.
    pub async fn run(&self, start: Instant) -> crate::Result<PollOutcome> {
        tracing::info!("Target: {}", self.host);
        tracing::info!("Timeout: {}", self.interval.as_secs());

        let mut attempts = 0u64;
        loop {
            attempts += 1;

            if self.prober.probe(&self.host).await {
                let elapsed = start.elapsed();
                tracing::info!("Host {} found in {}", self.host, format_elapsed(elapsed));

                tracing::debug!(
                    "Dispatching to '{}' after {} attempts",
                    self.notifier.type_name(),
                    attempts
                );
                self.notifier.notify(&self.host, elapsed).await?;

                return Ok(PollOutcome { attempts, elapsed });
            }

            tracing::info!("Pinging host failed...");
            tokio::time::sleep(self.interval).await;
        }
    }
}
