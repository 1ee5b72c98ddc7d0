// 3rd party crates
use reqwest::StatusCode;
use thiserror::Error;

/// Custom error type for Cloudflare operations.
#[derive(Debug, Error)]
pub enum CloudflareError {
    #[error("invalid authentication header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(#[source] reqwest::Error),

    #[error("request to Cloudflare failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Cloudflare returned HTTP {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },

    #[error("Cloudflare API error: {0}")]
    Api(String),

    #[error("no A record named '{name}' in zone")]
    RecordNotFound { name: String },
}
