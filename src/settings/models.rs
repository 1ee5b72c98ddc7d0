// 3rd party crates
use serde::Deserialize;

// Current module imports
use super::constants::{
    DEFAULT_LOG_DIR, DEFAULT_SLEEP_TIME, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT,
};

/// Daemon configuration, read once at startup from environment variables
/// (optionally seeded from a `.env` file). Immutable for the process
/// lifetime.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    // Cloudflare
    pub account_id: String,
    pub api_key: String,
    pub zone_id: String,
    /// Legacy key+email authentication. Falls back to `email` when unset.
    #[serde(default)]
    pub api_email: Option<String>,

    // Email
    #[serde(default)]
    pub email: Option<String>,
    pub email_from: String,
    pub email_to: String,
    pub email_password: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    // App
    /// Minutes to sleep between reconciliation cycles.
    #[serde(default = "default_sleep_time")]
    pub sleep_time: u64,
    /// Comma-separated list of fully-qualified record names.
    pub record_names: String,
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_smtp_host() -> String {
    DEFAULT_SMTP_HOST.to_string()
}

fn default_smtp_port() -> u16 {
    DEFAULT_SMTP_PORT
}

fn default_sleep_time() -> u64 {
    DEFAULT_SLEEP_TIME
}

fn default_log_dir() -> String {
    DEFAULT_LOG_DIR.to_string()
}
