// 3rd party crates
use serde::Deserialize;

// Project imports
use crate::providers::traits::DnsRecord;

/// One entry of the `errors` array in the Cloudflare response envelope.
#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub code: i64,
    pub message: String,
}

/// Envelope of `GET /zones/{zone}/dns_records`.
#[derive(Debug, Deserialize)]
pub struct ListRecordsResponse {
    #[serde(default)]
    pub result: Vec<DnsRecord>,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
}

/// Envelope of `PATCH /zones/{zone}/dns_records/{id}`. The updated record
/// itself is not used; only the success flag and errors matter.
#[derive(Debug, Deserialize)]
pub struct UpdateRecordResponse {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
}

/// First reported error message, or a placeholder when the API claims
/// failure without saying why.
pub fn first_error_message(errors: &[ApiMessage]) -> String {
    errors
        .first()
        .map(|e| e.message.clone())
        .unwrap_or_else(|| "unknown error".to_string())
}
