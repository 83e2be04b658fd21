//! LiveDNS API client
//!
//! Implements the LiveDNS v5 REST API operations used by the controller.
//! Based on the LiveDNS API structure: /v5/livedns/domains/{fqdn}/records

use crate::error::LiveDnsError;
use crate::livedns_trait::LiveDnsApi;
use crate::models::{ApiMessage, ZoneRecord};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.gandi.net/v5/livedns";

/// LiveDNS API client
pub struct LiveDnsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Request body for a bulk record replacement
#[derive(Debug, Serialize)]
struct ChangeRecordsRequest<'a> {
    items: &'a [ZoneRecord],
}

impl LiveDnsClient {
    /// Create a new LiveDNS client against the public API endpoint
    ///
    /// # Arguments
    /// * `api_key` - API key for authentication
    pub fn new(api_key: String) -> Result<Self, LiveDnsError> {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), api_key)
    }

    /// Create a new LiveDNS client against a specific endpoint
    ///
    /// # Arguments
    /// * `base_url` - LiveDNS base URL (e.g., "https://api.gandi.net/v5/livedns")
    /// * `api_key` - API key for authentication
    pub fn with_base_url(base_url: String, api_key: String) -> Result<Self, LiveDnsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(LiveDnsError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace every record set of a domain with the given batch
    ///
    /// This maps to `PUT /domains/{fqdn}/records`, which swaps the stored
    /// rrsets for the submitted ones in a single call, so every record in
    /// the batch is applied or none is.
    ///
    /// # Arguments
    /// * `fqdn` - The zone to update, e.g. "example.com"
    /// * `records` - The desired record sets; prior values are discarded
    ///
    /// # Returns
    /// * `Ok(ApiMessage)` - The provider's confirmation message
    /// * `Err(LiveDnsError)` - If the request fails
    pub async fn change_domain_records(
        &self,
        fqdn: &str,
        records: &[ZoneRecord],
    ) -> Result<ApiMessage, LiveDnsError> {
        let url = format!("{}/domains/{}/records", self.base_url, fqdn);
        debug!("Replacing {} record sets for domain {}", records.len(), fqdn);

        let response = self
            .client
            .put(&url)
            .header("Authorization", format!("Apikey {}", self.api_key))
            .header("Accept", "application/json")
            .json(&ChangeRecordsRequest { items: records })
            .send()
            .await
            .map_err(LiveDnsError::Http)?;

        let status = response.status();
        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            return Err(LiveDnsError::Authentication(format!(
                "Invalid API key: {} - {}",
                status, body
            )));
        }

        if status == 404 {
            return Err(LiveDnsError::NotFound(format!("Domain {} not found", fqdn)));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LiveDnsError::Api(format!(
                "Failed to change records for {}: {} - {}",
                fqdn, status, body
            )));
        }

        let body = response.text().await?;
        let message: ApiMessage = serde_json::from_str(&body)?;
        Ok(message)
    }
}

#[async_trait::async_trait]
impl LiveDnsApi for LiveDnsClient {
    fn base_url(&self) -> &str {
        LiveDnsClient::base_url(self)
    }

    async fn change_domain_records(
        &self,
        fqdn: &str,
        records: &[ZoneRecord],
    ) -> Result<ApiMessage, LiveDnsError> {
        LiveDnsClient::change_domain_records(self, fqdn, records).await
    }
}
