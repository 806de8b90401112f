//! BDD step definitions for polling feature

use std::time::Duration;

use cucumber::{given, then, when};
use tokio::time::Instant;

use dns_notify::DnsNotifyError;

use crate::world::DnsNotifyWorld;

#[given("desktop notifications")]
fn desktop_notifications(world: &mut DnsNotifyWorld) {
    world.config.webhook = None;
}

#[when(expr = "dns-notify waits for {string} with a {int} second timeout")]
async fn wait_for_host(world: &mut DnsNotifyWorld, host: String, timeout: u64) {
    world.config.host = host;
    world.config.timeout_seconds = timeout;

    let (http, runner) = world.build_backends();
    let outcome = dns_notify::run_with(world.config.clone(), http, runner, Instant::now()).await;
    world.outcome = Some(outcome);
}

#[then(expr = "the host should be found after {int} probes")]
async fn found_after_probes(world: &mut DnsNotifyWorld, probes: u64) {
    let outcome = world.outcome.as_ref().expect("no outcome");
    let outcome = outcome.as_ref().expect("run failed");
    assert_eq!(outcome.attempts, probes);
    assert_eq!(world.http().gets.read().await.len() as u64, probes);
}

#[then(expr = "the host should be found after {int} seconds")]
fn found_after_seconds(world: &mut DnsNotifyWorld, seconds: u64) {
    let outcome = world.outcome.as_ref().expect("no outcome");
    let outcome = outcome.as_ref().expect("run failed");
    assert_eq!(outcome.elapsed, Duration::from_secs(seconds));
}

#[then("the run should succeed")]
fn run_succeeds(world: &mut DnsNotifyWorld) {
    let outcome = world.outcome.as_ref().expect("no outcome");
    assert!(outcome.is_ok(), "{outcome:?}");
}

#[then("the run should fail with a configuration error")]
fn run_fails_with_config_error(world: &mut DnsNotifyWorld) {
    let outcome = world.outcome.as_ref().expect("no outcome");
    assert!(
        matches!(outcome, Err(DnsNotifyError::Config(_))),
        "{outcome:?}"
    );
}

#[then("the run should fail with an HTTP error")]
fn run_fails_with_http_error(world: &mut DnsNotifyWorld) {
    let outcome = world.outcome.as_ref().expect("no outcome");
    assert!(matches!(outcome, Err(DnsNotifyError::Http(_))), "{outcome:?}");
}

#[then("no probe should have been sent")]
async fn no_probe_sent(world: &mut DnsNotifyWorld) {
    assert!(world.http().gets.read().await.is_empty());
}
