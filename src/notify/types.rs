// Standard library
use std::net::IpAddr;
use std::time::Duration;

// 3rd party crates
use lettre::message::Mailbox;
use lettre::{AsyncSmtpTransport, Tokio1Executor};

/// A state transition worth telling the operator about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    /// First successful public-IP resolution after process start.
    Startup {
        ip: IpAddr,
        record_names: Vec<String>,
    },
    /// A record drifted and has been rewritten.
    DnsUpdated {
        record_name: String,
        old_ip: String,
        new_ip: IpAddr,
    },
    /// Connectivity came back after an outage.
    ConnectionRestored { downtime: Duration },
}

/// Sends notification emails over authenticated STARTTLS SMTP, one
/// message per event, to a single recipient.
pub struct EmailNotifier {
    pub(super) transport: AsyncSmtpTransport<Tokio1Executor>,
    pub(super) from: Mailbox,
    pub(super) to: Mailbox,
}
