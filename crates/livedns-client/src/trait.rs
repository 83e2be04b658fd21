//! LiveDnsApi trait for mocking
//!
//! This trait abstracts the LiveDNS client to enable mocking in unit tests.
//! The concrete LiveDnsClient implements this trait, and tests can use mock
//! implementations.

use crate::error::LiveDnsError;
use crate::models::{ApiMessage, ZoneRecord};

/// Trait for LiveDNS API client operations
///
/// This trait enables mocking of LiveDNS API calls for unit testing.
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait LiveDnsApi: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Replace every record set of a domain with the given batch
    async fn change_domain_records(
        &self,
        fqdn: &str,
        records: &[ZoneRecord],
    ) -> Result<ApiMessage, LiveDnsError>;
}
