// Standard library
use std::time::Duration;

/// Two-phase public IP resolver: STUN first, HTTP services as fallback.
pub struct IpResolver {
    pub(super) client: reqwest::Client,
    pub(super) stun_server: String,
    pub(super) http_services: Vec<String>,
    pub(super) stun_timeout: Duration,
}

/// Reachability probe against a single well-known endpoint.
pub struct HttpProbe {
    pub(super) client: reqwest::Client,
    pub(super) endpoint: String,
}
