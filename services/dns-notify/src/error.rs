//! Error types for dns-notify

/// Errors that can occur while waiting for a host or notifying about it
#[derive(Debug, thiserror::Error)]
pub enum DnsNotifyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Command failed: {0}")]
    Command(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for dns-notify operations
pub type Result<T> = std::result::Result<T, DnsNotifyError>;
