//! Contract tests for the reconciliation loop's state machine: the
//! connectivity transitions and the per-record reconcile semantics.

mod common;

// Standard library
use std::net::IpAddr;
use std::time::Duration;

// 3rd party crates
use tokio::time::Instant;

// Crate under test
use vigil_ddns::notify::NotificationEvent;
use vigil_ddns::runner::{Connectivity, Runner};

use common::{MockProvider, RecordingNotifier, ScriptedProbe, StaticResolver};

const CYCLE: Duration = Duration::from_secs(600);

fn runner(
    probe: &ScriptedProbe,
    resolver: &StaticResolver,
    provider: &MockProvider,
    notifier: &RecordingNotifier,
    record_names: &[&str],
) -> Runner<ScriptedProbe, StaticResolver, MockProvider, RecordingNotifier> {
    Runner::new(
        probe.clone(),
        resolver.clone(),
        provider.clone(),
        notifier.clone(),
        record_names.iter().map(|name| name.to_string()).collect(),
        CYCLE,
    )
}

#[tokio::test(start_paused = true)]
async fn unreachable_probe_marks_down_and_skips_all_dns_work() {
    let probe = ScriptedProbe::new(false);
    let resolver = StaticResolver::ok("203.0.113.5");
    let provider = MockProvider::new().with_record("a.example.com", "id-a", "198.51.100.1");
    let notifier = RecordingNotifier::new();
    let mut runner = runner(&probe, &resolver, &provider, &notifier, &["a.example.com"]);

    runner.run_cycle().await;

    match runner.state().connectivity {
        Connectivity::Down { since } => assert!(since <= Instant::now()),
        Connectivity::Up => panic!("expected disconnected state"),
    }
    assert_eq!(resolver.calls(), 0);
    assert_eq!(provider.find_calls(), 0);
    assert!(notifier.attempts().is_empty());
    assert!(!runner.state().startup_sent);
}

#[tokio::test(start_paused = true)]
async fn outage_spanning_two_cycles_restores_exactly_once() {
    let probe = ScriptedProbe::new(true);
    probe.script(&[false, false, true]);
    let resolver = StaticResolver::ok("203.0.113.5");
    let provider = MockProvider::new().with_record("a.example.com", "id-a", "203.0.113.5");
    let notifier = RecordingNotifier::new();
    let mut runner = runner(&probe, &resolver, &provider, &notifier, &["a.example.com"]);

    // First failure records the outage start.
    runner.run_cycle().await;
    assert!(runner.state().is_down());

    // Second failure keeps the original timestamp.
    tokio::time::advance(CYCLE).await;
    runner.run_cycle().await;
    assert!(runner.state().is_down());
    assert!(notifier.attempts().is_empty());

    // Recovery: one restoration notification spanning both intervals.
    tokio::time::advance(CYCLE).await;
    runner.run_cycle().await;

    assert!(!runner.state().is_down());
    assert_eq!(
        notifier.restored_attempts(),
        vec![NotificationEvent::ConnectionRestored {
            downtime: Duration::from_secs(1200),
        }]
    );
}

#[tokio::test(start_paused = true)]
async fn matching_record_is_left_alone() {
    let probe = ScriptedProbe::new(true);
    let resolver = StaticResolver::ok("203.0.113.5");
    let provider = MockProvider::new().with_record("a.example.com", "id-a", "203.0.113.5");
    let notifier = RecordingNotifier::new();
    let mut runner = runner(&probe, &resolver, &provider, &notifier, &["a.example.com"]);

    runner.run_cycle().await;

    assert!(provider.update_calls().is_empty());
    assert!(notifier.updated_attempts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn only_drifted_record_is_updated() {
    let probe = ScriptedProbe::new(true);
    let resolver = StaticResolver::ok("203.0.113.5");
    let provider = MockProvider::new()
        .with_record("a.example.com", "id-a", "203.0.113.5")
        .with_record("b.example.com", "id-b", "198.51.100.1");
    let notifier = RecordingNotifier::new();
    let mut runner = runner(
        &probe,
        &resolver,
        &provider,
        &notifier,
        &["a.example.com", "b.example.com"],
    );

    runner.run_cycle().await;

    let expected_ip: IpAddr = "203.0.113.5".parse().unwrap();
    assert_eq!(
        provider.update_calls(),
        vec![("id-b".to_string(), expected_ip)]
    );
    assert_eq!(
        notifier.updated_attempts(),
        vec![NotificationEvent::DnsUpdated {
            record_name: "b.example.com".to_string(),
            old_ip: "198.51.100.1".to_string(),
            new_ip: expected_ip,
        }]
    );
    assert_eq!(provider.record_content("b.example.com").unwrap(), "203.0.113.5");
}

#[tokio::test(start_paused = true)]
async fn provider_failure_on_one_record_leaves_siblings_unaffected() {
    let probe = ScriptedProbe::new(true);
    let resolver = StaticResolver::ok("203.0.113.5");
    let provider = MockProvider::new()
        .failing_find("a.example.com", "Unknown X-Auth-Key or X-Auth-Email")
        .with_record("b.example.com", "id-b", "198.51.100.1");
    let notifier = RecordingNotifier::new();
    let mut runner = runner(
        &probe,
        &resolver,
        &provider,
        &notifier,
        &["a.example.com", "b.example.com"],
    );

    runner.run_cycle().await;

    // Both records were attempted and the healthy one got its update.
    assert_eq!(provider.find_calls(), 2);
    let expected_ip: IpAddr = "203.0.113.5".parse().unwrap();
    assert_eq!(
        provider.update_calls(),
        vec![("id-b".to_string(), expected_ip)]
    );
}

#[tokio::test(start_paused = true)]
async fn update_failure_does_not_abort_remaining_records() {
    let probe = ScriptedProbe::new(true);
    let resolver = StaticResolver::ok("203.0.113.5");
    let provider = MockProvider::new()
        .with_record("a.example.com", "id-a", "198.51.100.1")
        .failing_update("id-a", "record locked")
        .with_record("b.example.com", "id-b", "198.51.100.2");
    let notifier = RecordingNotifier::new();
    let mut runner = runner(
        &probe,
        &resolver,
        &provider,
        &notifier,
        &["a.example.com", "b.example.com"],
    );

    runner.run_cycle().await;

    let expected_ip: IpAddr = "203.0.113.5".parse().unwrap();
    assert_eq!(
        provider.update_calls(),
        vec![
            ("id-a".to_string(), expected_ip),
            ("id-b".to_string(), expected_ip),
        ]
    );
    // The failed record produced no update notification; the healthy one did.
    assert_eq!(notifier.updated_attempts().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn resolver_failure_skips_cycle_without_marking_down() {
    let probe = ScriptedProbe::new(true);
    let resolver = StaticResolver::failing();
    let provider = MockProvider::new().with_record("a.example.com", "id-a", "198.51.100.1");
    let notifier = RecordingNotifier::new();
    let mut runner = runner(&probe, &resolver, &provider, &notifier, &["a.example.com"]);

    runner.run_cycle().await;

    assert!(!runner.state().is_down());
    assert!(!runner.state().startup_sent);
    assert_eq!(provider.find_calls(), 0);
    assert!(notifier.attempts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn at_most_one_update_per_record_per_cycle() {
    let probe = ScriptedProbe::new(true);
    let resolver = StaticResolver::ok("203.0.113.5");
    // The same name configured twice: the second pass sees the already
    // updated content and no-ops.
    let provider = MockProvider::new().with_record("a.example.com", "id-a", "198.51.100.1");
    let notifier = RecordingNotifier::new();
    let mut runner = runner(
        &probe,
        &resolver,
        &provider,
        &notifier,
        &["a.example.com", "a.example.com"],
    );

    runner.run_cycle().await;

    assert_eq!(provider.update_calls().len(), 1);
}
