//! Dynamic DNS reconciliation daemon.
//!
//! Periodically discovers the host's public IP address and updates
//! Cloudflare A-records that have drifted from it, emailing an operator
//! on state transitions: startup, DNS update and connectivity
//! restoration.
//!
//! The heart of the crate is [`runner::Runner`], a sequential
//! reconciliation loop generic over its four collaborators (connectivity
//! probe, public-IP resolver, DNS provider, notifier) so the state
//! machine can be exercised without the network.

pub mod logging;
pub mod notify;
pub mod providers;
pub mod resolver;
pub mod runner;
pub mod settings;
