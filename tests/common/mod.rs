//! Test doubles for the reconciliation loop's collaborators.
//!
//! Each double is cheaply cloneable with shared interior state, so a
//! test can hand one copy to the runner and keep another for
//! assertions.

#![allow(dead_code)]

// Standard library
use std::collections::{HashMap, VecDeque};
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// 3rd party crates
use async_trait::async_trait;
use thiserror::Error;

// Crate under test
use vigil_ddns::notify::{NotificationEvent, Notifier};
use vigil_ddns::providers::{DnsProvider, DnsRecord};
use vigil_ddns::resolver::{ConnectivityProbe, PublicIpResolver};

#[derive(Debug, Error)]
#[error("{0}")]
pub struct TestError(pub String);

/// Probe whose answers are scripted per call, falling back to a default.
#[derive(Clone)]
pub struct ScriptedProbe {
    outcomes: Arc<Mutex<VecDeque<bool>>>,
    default_outcome: bool,
    calls: Arc<AtomicUsize>,
}

impl ScriptedProbe {
    pub fn new(default_outcome: bool) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            default_outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn script(&self, outcomes: &[bool]) {
        self.outcomes.lock().unwrap().extend(outcomes.iter().copied());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConnectivityProbe for ScriptedProbe {
    async fn is_reachable(&self) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.default_outcome)
    }
}

/// Resolver that always returns the same IP, or always fails.
#[derive(Clone)]
pub struct StaticResolver {
    ip: Option<IpAddr>,
    calls: Arc<AtomicUsize>,
}

impl StaticResolver {
    pub fn ok(ip: &str) -> Self {
        Self {
            ip: Some(ip.parse().unwrap()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            ip: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PublicIpResolver for StaticResolver {
    type Error = TestError;

    async fn resolve_public_ip(&self) -> Result<IpAddr, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.ip
            .ok_or_else(|| TestError("all discovery services failed".to_string()))
    }
}

/// In-memory zone with injectable per-record failures.
#[derive(Clone, Default)]
pub struct MockProvider {
    records: Arc<Mutex<HashMap<String, DnsRecord>>>,
    find_errors: Arc<Mutex<HashMap<String, String>>>,
    update_errors: Arc<Mutex<HashMap<String, String>>>,
    find_calls: Arc<AtomicUsize>,
    update_calls: Arc<Mutex<Vec<(String, IpAddr)>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(self, name: &str, id: &str, content: &str) -> Self {
        self.records.lock().unwrap().insert(
            name.to_string(),
            DnsRecord {
                id: id.to_string(),
                record_type: "A".to_string(),
                name: name.to_string(),
                content: content.to_string(),
                ttl: 300,
            },
        );
        self
    }

    /// Makes `find_record_by_name(name)` fail with `message`.
    pub fn failing_find(self, name: &str, message: &str) -> Self {
        self.find_errors
            .lock()
            .unwrap()
            .insert(name.to_string(), message.to_string());
        self
    }

    /// Makes updates of the record with `id` fail with `message`.
    pub fn failing_update(self, id: &str, message: &str) -> Self {
        self.update_errors
            .lock()
            .unwrap()
            .insert(id.to_string(), message.to_string());
        self
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    /// `(record_id, new_ip)` pairs, in call order.
    pub fn update_calls(&self) -> Vec<(String, IpAddr)> {
        self.update_calls.lock().unwrap().clone()
    }

    pub fn record_content(&self, name: &str) -> Option<String> {
        self.records
            .lock()
            .unwrap()
            .get(name)
            .map(|record| record.content.clone())
    }
}

#[async_trait]
impl DnsProvider for MockProvider {
    type Error = TestError;

    async fn find_record_by_name(&self, name: &str) -> Result<DnsRecord, Self::Error> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self.find_errors.lock().unwrap().get(name) {
            return Err(TestError(message.clone()));
        }

        self.records
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| TestError(format!("no A record named '{name}' in zone")))
    }

    async fn update_record_content(
        &self,
        record_id: &str,
        ip: IpAddr,
    ) -> Result<(), Self::Error> {
        self.update_calls
            .lock()
            .unwrap()
            .push((record_id.to_string(), ip));

        if let Some(message) = self.update_errors.lock().unwrap().get(record_id) {
            return Err(TestError(message.clone()));
        }

        let mut records = self.records.lock().unwrap();
        if let Some(record) = records.values_mut().find(|record| record.id == record_id) {
            record.content = ip.to_string();
        }
        Ok(())
    }
}

/// Notifier that records every attempt and can fail the next N of them.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    attempts: Arc<Mutex<Vec<NotificationEvent>>>,
    fail_next: Arc<AtomicUsize>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the next `n` notification attempts.
    pub fn fail_next(&self, n: usize) {
        self.fail_next.store(n, Ordering::SeqCst);
    }

    /// Every attempted event, failed sends included, in order.
    pub fn attempts(&self) -> Vec<NotificationEvent> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn startup_attempts(&self) -> usize {
        self.attempts()
            .iter()
            .filter(|event| matches!(event, NotificationEvent::Startup { .. }))
            .count()
    }

    pub fn restored_attempts(&self) -> Vec<NotificationEvent> {
        self.attempts()
            .into_iter()
            .filter(|event| matches!(event, NotificationEvent::ConnectionRestored { .. }))
            .collect()
    }

    pub fn updated_attempts(&self) -> Vec<NotificationEvent> {
        self.attempts()
            .into_iter()
            .filter(|event| matches!(event, NotificationEvent::DnsUpdated { .. }))
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    type Error = TestError;

    async fn notify(&self, event: &NotificationEvent) -> Result<(), Self::Error> {
        self.attempts.lock().unwrap().push(event.clone());

        let remaining = self.fail_next.load(Ordering::SeqCst);
        if remaining > 0 {
            self.fail_next.store(remaining - 1, Ordering::SeqCst);
            return Err(TestError("smtp relay unavailable".to_string()));
        }
        Ok(())
    }
}
