// Standard library
use std::net::IpAddr;

// 3rd party crates
use async_trait::async_trait;

/// Cheap reachability check, distinct from IP resolution.
///
/// Implementations must be infallible: any transport failure maps to
/// `false`, never an error.
#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    async fn is_reachable(&self) -> bool;
}

/// Determines the machine's externally visible IP address.
#[async_trait]
pub trait PublicIpResolver: Send + Sync {
    type Error: std::error::Error + Send + Sync;

    async fn resolve_public_ip(&self) -> Result<IpAddr, Self::Error>;
}
