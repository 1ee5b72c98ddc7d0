// Standard library
use std::net::IpAddr;

// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::providers::traits::{DnsProvider, DnsRecord};
use crate::settings::Settings;

// Current module imports
use super::errors::CloudflareError;
use super::functions::{create_reqwest_client, find_record_by_name, update_record_content};
use super::types::{CfAuth, CfConfig, Cloudflare};

impl CfConfig {
    /// Derives the provider configuration from the daemon settings. The
    /// presence of an API email selects legacy key+email authentication;
    /// otherwise the API key is treated as a bearer token.
    pub fn from_settings(settings: &Settings) -> Self {
        let auth = match settings.api_email() {
            Some(email) => CfAuth::Legacy {
                email: email.to_string(),
                key: settings.api_key.clone(),
            },
            None => CfAuth::Token(settings.api_key.clone()),
        };

        Self {
            account_id: settings.account_id.clone(),
            zone_id: settings.zone_id.clone(),
            auth,
        }
    }
}

impl Cloudflare {
    pub fn new(config: CfConfig) -> Result<Self, CloudflareError> {
        let client = create_reqwest_client(&config.auth)?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl DnsProvider for Cloudflare {
    type Error = CloudflareError;

    async fn find_record_by_name(&self, name: &str) -> Result<DnsRecord, Self::Error> {
        find_record_by_name(self, name).await
    }

    async fn update_record_content(
        &self,
        record_id: &str,
        ip: IpAddr,
    ) -> Result<(), Self::Error> {
        update_record_content(self, record_id, ip).await
    }
}
