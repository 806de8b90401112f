//! BDD step definitions for probe feature

use cucumber::{given, then, when};

use dns_notify::prober::Prober;

use crate::mock_backends::TargetBehavior;
use crate::world::DnsNotifyWorld;

#[given("a target that answers immediately")]
fn target_answers(world: &mut DnsNotifyWorld) {
    world.target = TargetBehavior::AnswersAfter {
        failures: 0,
        status: 200,
    };
}

#[given(expr = "a target that answers with status {int}")]
fn target_answers_with_status(world: &mut DnsNotifyWorld, status: u16) {
    world.target = TargetBehavior::AnswersAfter {
        failures: 0,
        status,
    };
}

#[given(expr = "a target that fails {int} times before answering")]
fn target_fails_then_answers(world: &mut DnsNotifyWorld, failures: u32) {
    world.target = TargetBehavior::AnswersAfter {
        failures,
        status: 200,
    };
}

#[given("a target that never answers")]
fn target_never_answers(world: &mut DnsNotifyWorld) {
    world.target = TargetBehavior::NeverAnswers;
}

#[when(expr = "the host {string} is probed")]
async fn probe_host(world: &mut DnsNotifyWorld, host: String) {
    let (http, _runner) = world.build_backends();
    let prober = Prober::new(http);
    world.probe_result = Some(prober.probe(&host).await);
}

#[then("the probe should succeed")]
fn probe_succeeds(world: &mut DnsNotifyWorld) {
    assert_eq!(world.probe_result, Some(true));
}

#[then("the probe should fail")]
fn probe_fails(world: &mut DnsNotifyWorld) {
    assert_eq!(world.probe_result, Some(false));
}

#[then(expr = "the request URL should be {string}")]
async fn request_url_is(world: &mut DnsNotifyWorld, url: String) {
    let gets = world.http().gets.read().await;
    assert_eq!(gets.as_slice(), [url]);
}
