//! Single-shot reachability check

use std::sync::Arc;
use std::time::Duration;

use crate::config::ensure_scheme;
use crate::io::HttpClient;

/// Upper bound on a single probe, independent of the poll interval
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Checks whether a host answers HTTP requests
pub struct Prober {
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for Prober {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prober").finish_non_exhaustive()
    }
}

impl Prober {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// Returns true if a GET against `host` completes.
    ///
    /// The status code is ignored, so a 404 or 503 still counts as reachable.
    pub async fn probe(&self, host: &str) -> bool {
        let url = ensure_scheme(host);
        match self.http.get(&url).await {
            Ok(status) => {
                tracing::debug!("Probe {} answered with status {}", url, status);
                true
            }
            Err(e) => {
                tracing::debug!("Probe {} failed: {}", url, e);
                false
            }
        }
    }
}
