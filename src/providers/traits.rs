// Standard library
use std::net::IpAddr;

// 3rd party crates
use async_trait::async_trait;
use serde::Deserialize;

/// A single type-A DNS record as reported by the provider. Records are
/// fetched fresh every cycle and never cached, so out-of-band changes at
/// the provider are picked up on the next cycle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DnsRecord {
    /// Opaque provider identifier.
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    /// Fully-qualified domain name.
    pub name: String,
    /// The record's current IP address, as a string literal.
    pub content: String,
    pub ttl: u32,
}

/// Read/update access to the A-records of one DNS zone.
///
/// The reconciliation loop only needs two operations: look a record up by
/// its fully-qualified name and rewrite its content. Listing, filtering and
/// authentication are implementation details of the provider.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    type Error: std::error::Error + Send + Sync;

    /// Returns the first type-A record whose name matches `name` exactly.
    async fn find_record_by_name(&self, name: &str) -> Result<DnsRecord, Self::Error>;

    /// Rewrites only the content field of the record to `ip`.
    async fn update_record_content(&self, record_id: &str, ip: IpAddr)
        -> Result<(), Self::Error>;
}
