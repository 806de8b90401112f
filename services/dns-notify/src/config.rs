//! Configuration types for dns-notify

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Host to wait for, with or without a scheme
    #[serde(default)]
    pub host: String,
    /// Seconds to sleep between failed probes
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub webhook: Option<String>,
    #[serde(default)]
    pub desktop: DesktopConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: String::new(),
            timeout_seconds: default_timeout_seconds(),
            webhook: None,
            desktop: DesktopConfig::default(),
        }
    }
}

impl Config {
    /// Resolve which notifier variant this configuration selects
    pub fn notification_mode(&self) -> NotificationMode {
        match self.webhook.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => NotificationMode::Webhook {
                url: ensure_scheme(url),
            },
            _ => NotificationMode::Desktop,
        }
    }
}

/// Desktop notification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesktopConfig {
    #[serde(default = "default_desktop_command")]
    pub command: String,
    #[serde(default = "default_desktop_title")]
    pub title: String,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            command: default_desktop_command(),
            title: default_desktop_title(),
        }
    }
}

/// How the user is told that the host came up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationMode {
    Desktop,
    /// `url` already carries a scheme
    Webhook { url: String },
}

fn default_timeout_seconds() -> u64 {
    3
}

fn default_desktop_command() -> String {
    "notify-send".to_string()
}

fn default_desktop_title() -> String {
    "DNS Notify".to_string()
}

/// Prefix `https://` unless the URL already starts with `http://` or `https://`
pub fn ensure_scheme(url: &str) -> String {
    if url.starts_with("https://") || url.starts_with("http://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::DnsNotifyError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
