// Standard library
use std::time::Duration;

// 3rd party crates
use tokio::time::Instant;

/// Connectivity as the loop last observed it. The outage timestamp only
/// exists while disconnected, so "down without a timestamp" and "up with
/// a stale timestamp" cannot be represented.
#[derive(Debug, Clone, Copy)]
pub enum Connectivity {
    Up,
    Down { since: Instant },
}

/// State owned exclusively by the reconciliation loop. Created once at
/// loop entry, never persisted: a restart re-sends the startup
/// notification and forgets prior connectivity history.
#[derive(Debug)]
pub struct ReconcilerState {
    pub connectivity: Connectivity,
    /// Latches to true on the first successful startup notification.
    pub startup_sent: bool,
}

impl ReconcilerState {
    pub fn new() -> Self {
        Self {
            connectivity: Connectivity::Up,
            startup_sent: false,
        }
    }

    pub fn is_down(&self) -> bool {
        matches!(self.connectivity, Connectivity::Down { .. })
    }
}

impl Default for ReconcilerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives reconciliation against its four collaborators: connectivity
/// probe, public-IP resolver, DNS provider and notifier.
pub struct Runner<C, R, D, N> {
    pub(super) probe: C,
    pub(super) resolver: R,
    pub(super) provider: D,
    pub(super) notifier: N,
    /// Record names in configured order; duplicates allowed.
    pub(super) record_names: Vec<String>,
    pub(super) sleep: Duration,
    pub(super) state: ReconcilerState,
}
