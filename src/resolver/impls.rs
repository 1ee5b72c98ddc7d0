// Standard library
use std::net::IpAddr;
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use tracing::{debug, warn};

// Current module imports
use super::constants::{IP_CHECK_SERVICES, NETWORK_TIMEOUT_SECS, PROBE_URL, STUN_SERVER};
use super::errors::ResolveError;
use super::stun;
use super::traits::{ConnectivityProbe, PublicIpResolver};
use super::types::{HttpProbe, IpResolver};

impl IpResolver {
    pub fn new() -> Self {
        Self::with_endpoints(
            STUN_SERVER.to_string(),
            IP_CHECK_SERVICES.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// Resolver against explicit endpoints; the production constructor
    /// uses the well-known ones.
    pub fn with_endpoints(stun_server: String, http_services: Vec<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(NETWORK_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            stun_server,
            http_services,
            stun_timeout: Duration::from_secs(NETWORK_TIMEOUT_SECS),
        }
    }

    pub fn with_stun_timeout(mut self, timeout: Duration) -> Self {
        self.stun_timeout = timeout;
        self
    }

    /// STUN phase, bounded as one unit: socket setup, request and
    /// response all count against the same deadline.
    async fn resolve_via_stun(&self) -> Option<IpAddr> {
        let exchange = stun::binding_exchange(&self.stun_server);
        match tokio::time::timeout(self.stun_timeout, exchange).await {
            Ok(Ok(ip)) => {
                debug!(server = %self.stun_server, "STUN resolved public IP {}", ip);
                Some(ip)
            }
            Ok(Err(e)) => {
                debug!(server = %self.stun_server, "STUN lookup failed: {}", e);
                None
            }
            Err(_) => {
                debug!(server = %self.stun_server, "STUN lookup timed out");
                None
            }
        }
    }

    /// Fallback phase: each service is tried in order, first body that
    /// parses as an IP address literal wins.
    async fn resolve_via_http(&self) -> Option<IpAddr> {
        for service in &self.http_services {
            let body = match self.client.get(service).send().await {
                Ok(response) => match response.text().await {
                    Ok(body) => body,
                    Err(e) => {
                        debug!(service = %service, "Failed to read body: {}", e);
                        continue;
                    }
                },
                Err(e) => {
                    debug!(service = %service, "Request failed: {}", e);
                    continue;
                }
            };

            match body.trim().parse::<IpAddr>() {
                Ok(ip) => {
                    debug!(service = %service, "HTTP fallback resolved public IP {}", ip);
                    return Some(ip);
                }
                Err(_) => {
                    warn!(
                        service = %service,
                        "Service returned something that is not an IP address"
                    );
                }
            }
        }

        None
    }
}

impl Default for IpResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PublicIpResolver for IpResolver {
    type Error = ResolveError;

    async fn resolve_public_ip(&self) -> Result<IpAddr, Self::Error> {
        if let Some(ip) = self.resolve_via_stun().await {
            return Ok(ip);
        }

        self.resolve_via_http()
            .await
            .ok_or(ResolveError::AllServicesFailed)
    }
}

impl HttpProbe {
    pub fn new() -> Self {
        Self::with_endpoint(PROBE_URL.to_string())
    }

    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(NETWORK_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            endpoint,
        }
    }
}

impl Default for HttpProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectivityProbe for HttpProbe {
    /// Any response at all counts as reachable; the status code and body
    /// are irrelevant, only transport-level success matters.
    async fn is_reachable(&self) -> bool {
        self.client.get(&self.endpoint).send().await.is_ok()
    }
}
