//! dns-notify CLI
//!
//! Waits until a host answers HTTP, then sends a desktop notification or
//! calls a webhook.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use dns_notify::{load_config, Config};
use tokio::time::Instant;
use tracing::Level;

#[derive(Parser)]
#[command(name = "dns-notify")]
#[command(about = "Wait for a host to become reachable, then send a notification")]
#[command(version)]
struct Args {
    /// Host to wait for, e.g. example.com
    #[arg(long)]
    host: Option<String>,

    /// Seconds to wait between probes [default: 3]
    #[arg(long)]
    timeout: Option<u64>,

    /// Webhook URL to POST to instead of a desktop notification, e.g. example.com/webhook
    #[arg(long)]
    webhook: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: host={:?}, timeout={:?}, webhook={:?}, config={:?}",
        args.host,
        args.timeout,
        args.webhook,
        args.config
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        Config::default()
    };

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(timeout) = args.timeout {
        config.timeout_seconds = timeout;
    }
    if let Some(webhook) = args.webhook {
        config.webhook = Some(webhook);
    }

    if config.host.is_empty() {
        eprintln!(
            "{}\n\nExample: dns-notify --host example.com",
            Args::command().render_usage()
        );
        std::process::exit(1);
    }

    if let Err(e) = dns_notify::run(config, start).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}
