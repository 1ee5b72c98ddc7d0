// Standard library
use std::net::IpAddr;
use std::time::Duration;

// 3rd party crates
use tokio::sync::broadcast;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

// Project imports
use crate::notify::{NotificationEvent, Notifier};
use crate::providers::DnsProvider;
use crate::resolver::{ConnectivityProbe, PublicIpResolver};

// Current module imports
use super::types::{Connectivity, ReconcilerState, Runner};

impl<C, R, D, N> Runner<C, R, D, N>
where
    C: ConnectivityProbe,
    R: PublicIpResolver,
    D: DnsProvider,
    N: Notifier,
{
    pub fn new(
        probe: C,
        resolver: R,
        provider: D,
        notifier: N,
        record_names: Vec<String>,
        sleep: Duration,
    ) -> Self {
        Self {
            probe,
            resolver,
            provider,
            notifier,
            record_names,
            sleep,
            state: ReconcilerState::new(),
        }
    }

    pub fn state(&self) -> &ReconcilerState {
        &self.state
    }

    /// Runs cycles until the shutdown signal arrives. The first cycle
    /// runs immediately; the sleep between cycles is the loop's only
    /// suspension point. An in-flight cycle is never cancelled mid-way.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        info!(
            "Starting reconciliation loop, {} record(s), cycle every {} minute(s)",
            self.record_names.len(),
            self.sleep.as_secs() / 60
        );

        self.run_cycle().await;

        loop {
            tokio::select! {
                Ok(_) = shutdown.recv() => {
                    info!("Received shutdown signal, stopping reconciliation loop");
                    break;
                }

                _ = tokio::time::sleep(self.sleep) => {
                    self.run_cycle().await;
                }
            }
        }
    }

    /// One transition of the state machine. The caller owns the cadence;
    /// no two cycles ever run concurrently.
    pub async fn run_cycle(&mut self) {
        debug!("Starting reconciliation cycle");

        if !self.probe.is_reachable().await {
            if !self.state.is_down() {
                error!("No internet connection");
                self.state.connectivity = Connectivity::Down {
                    since: Instant::now(),
                };
            }
            // No notification here: no channel can be assumed reachable.
            // No DNS work happens while disconnected.
            return;
        }

        if let Connectivity::Down { since } = self.state.connectivity {
            let downtime = since.elapsed();
            info!(
                "Internet connection restored after {}s offline",
                downtime.as_secs()
            );
            self.notify_best_effort(&NotificationEvent::ConnectionRestored { downtime })
                .await;
            self.state.connectivity = Connectivity::Up;
        }

        let current_ip: IpAddr = match self.resolver.resolve_public_ip().await {
            Ok(ip) => ip,
            Err(e) => {
                // A failed lookup with the internet up is a resolver
                // problem, not an outage; connectivity state is untouched.
                error!("Failed to resolve public IP: {}", e);
                return;
            }
        };

        info!("Public IP detected: {}", current_ip);

        if !self.state.startup_sent {
            let event = NotificationEvent::Startup {
                ip: current_ip,
                record_names: self.record_names.clone(),
            };
            // The only retried side effect: the flag latches on a
            // successful send, so failures re-attempt next cycle.
            if self.notify_best_effort(&event).await {
                info!("Startup notification sent");
                self.state.startup_sent = true;
            }
        }

        debug!("Reconciling {} DNS record(s)", self.record_names.len());

        for name in &self.record_names {
            if let Err(e) = reconcile_record(
                &self.provider,
                &self.notifier,
                name,
                current_ip,
            )
            .await
            {
                error!(record = %name, "Failed to reconcile record: {}", e);
            }
        }
    }

    async fn notify_best_effort(&self, event: &NotificationEvent) -> bool {
        match self.notifier.notify(event).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to send notification: {}", e);
                false
            }
        }
    }
}

/// Reconciles a single record against the resolved IP. A failure here
/// abandons only this record for the cycle; siblings are unaffected.
async fn reconcile_record<D: DnsProvider, N: Notifier>(
    provider: &D,
    notifier: &N,
    name: &str,
    current_ip: IpAddr,
) -> Result<(), D::Error> {
    let record = provider.find_record_by_name(name).await?;

    debug!(
        record = %name,
        "Provider reports {} -> {} (id {})",
        record.name,
        record.content,
        record.id
    );

    if record.content == current_ip.to_string() {
        debug!(record = %name, "Record already points at {}, nothing to do", current_ip);
        return Ok(());
    }

    let old_ip = record.content;
    info!(
        record = %name,
        "Record drifted: DNS has {}, current IP is {}. Updating",
        old_ip,
        current_ip
    );

    provider.update_record_content(&record.id, current_ip).await?;

    info!(record = %name, "Record updated: {} -> {}", old_ip, current_ip);

    // The DNS change is already applied; a lost notification must not
    // undo or retry it.
    if let Err(e) = notifier
        .notify(&NotificationEvent::DnsUpdated {
            record_name: name.to_string(),
            old_ip,
            new_ip: current_ip,
        })
        .await
    {
        warn!(record = %name, "Failed to send update notification: {}", e);
    }

    Ok(())
}
