// Standard library
use std::net::IpAddr;
use std::time::Duration;

// 3rd party crates
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{header, Client};
use serde_json::json;
use tracing::debug;

// Current module imports
use super::constants::{API_TIMEOUT_SECS, CLOUDFLARE_API_BASE};
use super::errors::CloudflareError;
use super::models::{first_error_message, ListRecordsResponse, UpdateRecordResponse};
use super::types::{CfAuth, Cloudflare};
use crate::providers::traits::DnsRecord;

/// Creates a reqwest client with the appropriate authentication headers
/// for the Cloudflare API. Credentials are attached as default headers so
/// every request carries them identically.
pub(super) fn create_reqwest_client(auth: &CfAuth) -> Result<Client, CloudflareError> {
    let mut headers: HeaderMap = HeaderMap::new();

    // Mark security-sensitive headers with `set_sensitive`.
    match auth {
        CfAuth::Legacy { email, key } => {
            headers.insert("X-Auth-Email", HeaderValue::from_str(email)?);
            let mut key_value: HeaderValue = HeaderValue::from_str(key)?;
            key_value.set_sensitive(true);
            headers.insert("X-Auth-Key", key_value);
        }
        CfAuth::Token(token) => {
            let bearer: String = format!("Bearer {}", token);
            let mut auth_value: HeaderValue = HeaderValue::from_str(&bearer)?;
            auth_value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, auth_value);
        }
    }

    Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(API_TIMEOUT_SECS))
        .build()
        .map_err(CloudflareError::HttpClientBuild)
}

/// Fetches all type-A records of the zone in one call.
pub async fn list_a_records(cloudflare: &Cloudflare) -> Result<Vec<DnsRecord>, CloudflareError> {
    let url = format!(
        "{}/zones/{}/dns_records?type=A",
        CLOUDFLARE_API_BASE, cloudflare.config.zone_id
    );

    debug!(zone = %cloudflare.config.zone_id, "Listing A records");

    let response = cloudflare.client.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CloudflareError::HttpStatus { status, body });
    }

    let envelope: ListRecordsResponse = response.json().await?;
    if !envelope.success {
        return Err(CloudflareError::Api(first_error_message(&envelope.errors)));
    }

    Ok(envelope.result)
}

/// Looks a record up by its fully-qualified name.
///
/// Filtering happens client-side on the full listing rather than through
/// the API's `?name=` query parameter, so the behavior stays identical
/// across provider API versions.
pub async fn find_record_by_name(
    cloudflare: &Cloudflare,
    name: &str,
) -> Result<DnsRecord, CloudflareError> {
    let records = list_a_records(cloudflare).await?;

    records
        .into_iter()
        .find(|record| record.name == name)
        .ok_or_else(|| CloudflareError::RecordNotFound {
            name: name.to_string(),
        })
}

/// Issues a partial update that rewrites only the record's content field.
pub async fn update_record_content(
    cloudflare: &Cloudflare,
    record_id: &str,
    ip: IpAddr,
) -> Result<(), CloudflareError> {
    let url = format!(
        "{}/zones/{}/dns_records/{}",
        CLOUDFLARE_API_BASE, cloudflare.config.zone_id, record_id
    );

    debug!(
        zone = %cloudflare.config.zone_id,
        record_id = %record_id,
        "Updating record content to {}",
        ip
    );

    let response = cloudflare
        .client
        .patch(&url)
        .json(&json!({ "content": ip.to_string() }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CloudflareError::HttpStatus { status, body });
    }

    let envelope: UpdateRecordResponse = response.json().await?;
    if !envelope.success {
        return Err(CloudflareError::Api(first_error_message(&envelope.errors)));
    }

    Ok(())
}
