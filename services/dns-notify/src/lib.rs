//! dns-notify - wait for a host to come up, then tell someone
//!
//! Probes a host over HTTP on a fixed interval. Once it answers, a desktop
//! notification or a webhook is fired and the run ends.

pub mod config;
pub mod desktop;
pub mod error;
pub mod io;
pub mod notifier;
pub mod prober;
pub mod scheduler;
pub mod webhook;

pub use config::{load_config, Config};
pub use error::{DnsNotifyError, Result};

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::io::{CommandRunner, HttpClient, ReqwestHttpClient, TokioCommandRunner};
use crate::prober::{Prober, PROBE_TIMEOUT};
use crate::scheduler::{PollOutcome, Scheduler};

/// Run dns-notify with the given configuration
///
/// `start` is the instant elapsed time is reported against.
pub async fn run(config: Config, start: Instant) -> Result<PollOutcome> {
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::with_timeout(PROBE_TIMEOUT)?);
    let runner: Arc<dyn CommandRunner> = Arc::new(TokioCommandRunner);
    run_with(config, http, runner, start).await
}

/// Like [`run`], with caller-supplied HTTP and command backends
pub async fn run_with(
    config: Config,
    http: Arc<dyn HttpClient>,
    runner: Arc<dyn CommandRunner>,
    start: Instant,
) -> Result<PollOutcome> {
    if config.host.is_empty() {
        return Err(DnsNotifyError::Config("host must not be empty".to_string()));
    }

    let notifier = notifier::build_notifier(&config, Arc::clone(&http), runner);
    tracing::debug!("Using '{}' notifier", notifier.type_name());

    let scheduler = Scheduler::new(
        config.host,
        Duration::from_secs(config.timeout_seconds),
        Prober::new(http),
        notifier,
    );

    scheduler.run(start).await
}
