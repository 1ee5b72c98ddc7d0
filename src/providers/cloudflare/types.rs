// 3rd party crates
use reqwest::Client;

/// Client for the A-records of one Cloudflare zone.
#[derive(Debug, Clone)]
pub struct Cloudflare {
    pub config: CfConfig,
    pub client: Client,
}

/// Configuration for Cloudflare API interactions.
#[derive(Debug, Clone)]
pub struct CfConfig {
    pub account_id: String,
    pub zone_id: String,
    pub auth: CfAuth,
}

/// Credential mode, chosen once at construction and applied identically
/// to every request.
#[derive(Debug, Clone)]
pub enum CfAuth {
    /// Legacy `X-Auth-Email` + `X-Auth-Key` header pair.
    Legacy { email: String, key: String },
    /// `Authorization: Bearer` token.
    Token(String),
}
