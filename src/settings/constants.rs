/// Default SMTP submission host (Gmail).
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP submission port (STARTTLS).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sleep between reconciliation cycles, in minutes.
pub const DEFAULT_SLEEP_TIME: u64 = 10;

/// Default directory for the append-only log file.
pub const DEFAULT_LOG_DIR: &str = "logs";
