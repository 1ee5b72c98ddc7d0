/// Subject prefix for every notification email.
pub const SUBJECT_PREFIX: &str = "[vigil-ddns]";

/// Timestamp rendering used in notification bodies.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Upper bound on one SMTP submission.
pub const SMTP_TIMEOUT_SECS: u64 = 30;
