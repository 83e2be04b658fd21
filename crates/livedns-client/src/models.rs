//! LiveDNS API models
//!
//! These models match the LiveDNS v5 record serializers.
//! See: /v5/livedns/domains/{fqdn}/records

use serde::{Deserialize, Serialize};

/// One record set (rrset) of a zone
///
/// The field names are the LiveDNS wire names, so the struct serializes
/// directly into the `items` payload of a record replacement call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    /// Record type, e.g. "A"
    pub rrset_type: String,
    /// Record name relative to the zone, e.g. "www"
    pub rrset_name: String,
    /// Time to live in seconds
    pub rrset_ttl: u32,
    /// Full value list; replaces whatever the zone currently stores
    pub rrset_values: Vec<String>,
}

/// Message envelope returned by LiveDNS mutation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
