//! Gandi LiveDNS REST API Client
//!
//! A Rust client library for the LiveDNS v5 API, covering the record
//! operations the node DNS controller needs: replacing the full record
//! set of a managed zone in a single call.
//!
//! # Example
//!
//! ```no_run
//! use livedns_client::{LiveDnsClient, ZoneRecord};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = LiveDnsClient::new("your-api-key".to_string())?;
//!
//! // Replace every record set of the zone in one call
//! let records = vec![ZoneRecord {
//!     rrset_type: "A".to_string(),
//!     rrset_name: "www".to_string(),
//!     rrset_ttl: 300,
//!     rrset_values: vec!["203.0.113.10".to_string()],
//! }];
//! client.change_domain_records("example.com", &records).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Bulk record replacement**: One `PUT` replaces all rrsets of a domain
//! - **Typed errors**: Authentication, not-found, and API failures are distinct
//! - **Mocking**: `LiveDnsApi` trait plus an in-memory mock behind `test-util`

pub mod client;
pub mod error;
#[path = "trait.rs"]
pub mod livedns_trait;
pub mod models;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::LiveDnsClient;
pub use error::LiveDnsError;
pub use livedns_trait::LiveDnsApi;
pub use models::*;
#[cfg(feature = "test-util")]
pub use mock::{MockLiveDnsClient, RecordedCall};
