//! Mock LiveDnsClient for unit testing
//!
//! This module provides a mock implementation of LiveDnsApi that can be used
//! in unit tests without requiring a LiveDNS account.
//!
//! The mock records every submitted batch so tests can assert on the exact
//! zone and record sets of each call, and can be armed to fail the next call
//! to exercise error paths.

use crate::error::LiveDnsError;
use crate::livedns_trait::LiveDnsApi;
use crate::models::{ApiMessage, ZoneRecord};
use std::sync::{Arc, Mutex};

/// One recorded `change_domain_records` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub fqdn: String,
    pub records: Vec<ZoneRecord>,
}

/// Mock LiveDnsClient for testing
///
/// Clones share the same call log, so a test can hand the mock to the code
/// under test and keep a handle for assertions.
#[derive(Clone)]
pub struct MockLiveDnsClient {
    base_url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    fail_next: Arc<Mutex<Option<String>>>,
}

impl MockLiveDnsClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_next: Arc::new(Mutex::new(None)),
        }
    }

    /// Arm the mock to fail the next call with the given API error message
    ///
    /// The failing call is still recorded as an attempt.
    pub fn fail_next(&self, message: impl Into<String>) {
        *self.fail_next.lock().unwrap() = Some(message.into());
    }

    /// All recorded calls, in submission order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl LiveDnsApi for MockLiveDnsClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn change_domain_records(
        &self,
        fqdn: &str,
        records: &[ZoneRecord],
    ) -> Result<ApiMessage, LiveDnsError> {
        self.calls.lock().unwrap().push(RecordedCall {
            fqdn: fqdn.to_string(),
            records: records.to_vec(),
        });

        if let Some(message) = self.fail_next.lock().unwrap().take() {
            return Err(LiveDnsError::Api(message));
        }

        Ok(ApiMessage {
            message: "DNS Record Created".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ZoneRecord {
        ZoneRecord {
            rrset_type: "A".to_string(),
            rrset_name: name.to_string(),
            rrset_ttl: 300,
            rrset_values: vec!["10.0.0.1".to_string()],
        }
    }

    #[tokio::test]
    async fn test_mock_records_calls_in_order() {
        let mock = MockLiveDnsClient::new("http://livedns.test");

        mock.change_domain_records("example.com", &[record("a")])
            .await
            .unwrap();
        mock.change_domain_records("example.com", &[record("b")])
            .await
            .unwrap();

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].fqdn, "example.com");
        assert_eq!(calls[0].records[0].rrset_name, "a");
        assert_eq!(calls[1].records[0].rrset_name, "b");
    }

    #[tokio::test]
    async fn test_mock_fails_once_when_armed() {
        let mock = MockLiveDnsClient::new("http://livedns.test");
        mock.fail_next("boom");

        let err = mock
            .change_domain_records("example.com", &[record("a")])
            .await
            .unwrap_err();
        assert!(matches!(err, LiveDnsError::Api(_)));

        // Armed failure is consumed; the retry succeeds and both attempts are recorded
        mock.change_domain_records("example.com", &[record("a")])
            .await
            .unwrap();
        assert_eq!(mock.call_count(), 2);
    }
}
