//! Plain-text subject and body templates, one per event kind.

// Standard library
use std::time::Duration;

// Current module imports
use super::constants::SUBJECT_PREFIX;
use super::types::NotificationEvent;

pub fn subject(event: &NotificationEvent) -> String {
    match event {
        NotificationEvent::Startup { .. } => {
            format!("{} DNS reconciler running", SUBJECT_PREFIX)
        }
        NotificationEvent::DnsUpdated { record_name, .. } => {
            format!("{} DNS updated: {}", SUBJECT_PREFIX, record_name)
        }
        NotificationEvent::ConnectionRestored { .. } => {
            format!("{} Internet connection restored", SUBJECT_PREFIX)
        }
    }
}

/// Renders the body for `event`. The timestamp is passed in already
/// formatted so templates stay deterministic under test.
pub fn body(event: &NotificationEvent, timestamp: &str) -> String {
    match event {
        NotificationEvent::Startup { ip, record_names } => {
            let records_list = record_names
                .iter()
                .map(|name| format!("- {}", name))
                .collect::<Vec<_>>()
                .join("\n");

            format!(
                "Hello,\n\n\
                 The DNS reconciler has started successfully.\n\n\
                 Details:\n\
                 - Detected public IP: {ip}\n\
                 - Started at: {timestamp}\n\
                 - Configured records:\n{records_list}\n\n\
                 The configured DNS records are now being monitored.\n\n\
                 This is an automated message, please do not reply.\n\n\
                 --\nvigil-ddns\n"
            )
        }
        NotificationEvent::DnsUpdated {
            record_name,
            old_ip,
            new_ip,
        } => {
            format!(
                "Hello,\n\n\
                 A DNS record has been updated automatically.\n\n\
                 Details:\n\
                 - Record: {record_name}\n\
                 - Previous IP: {old_ip}\n\
                 - New IP: {new_ip}\n\
                 - Updated at: {timestamp}\n\n\
                 This is an automated message, please do not reply.\n\n\
                 --\nvigil-ddns\n"
            )
        }
        NotificationEvent::ConnectionRestored { downtime } => {
            let downtime = format_downtime(*downtime);
            format!(
                "Hello,\n\n\
                 The internet connection has been restored.\n\n\
                 Details:\n\
                 - Time offline: {downtime}\n\
                 - Restored at: {timestamp}\n\n\
                 The DNS reconciler has resumed normal operation.\n\n\
                 This is an automated message, please do not reply.\n\n\
                 --\nvigil-ddns\n"
            )
        }
    }
}

/// Renders an outage duration as days/hours/minutes, dropping the larger
/// units when they are zero.
pub fn format_downtime(downtime: Duration) -> String {
    let total_minutes = downtime.as_secs() / 60;
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;

    if days > 0 {
        format!("{} day(s), {} hour(s), {} minute(s)", days, hours, minutes)
    } else if hours > 0 {
        format!("{} hour(s), {} minute(s)", hours, minutes)
    } else {
        format!("{} minute(s)", minutes)
    }
}
