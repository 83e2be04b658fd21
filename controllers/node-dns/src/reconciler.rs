//! Reconciliation logic for the managed DNS records.
//!
//! One cycle lists the cached nodes, computes the sorted external IP set
//! of the ready ones, and when it differs from the last pushed set,
//! replaces every managed record in one LiveDNS call.

use crate::error::ControllerError;
use crate::reconcile_helpers::ready_external_ips;
use k8s_openapi::api::core::v1::Node;
use kube_runtime::reflector::Store;
use livedns_client::{LiveDnsApi, ZoneRecord};
use tracing::{debug, info};

/// TTL applied to every managed record set
pub const RECORD_TTL_SECONDS: u32 = 300;

/// Reconciles the managed DNS records against the current node set.
///
/// Owns the last pushed IP list. `reconcile` takes `&mut self`, so cycles
/// are serialized by construction and the field needs no locking.
pub struct Reconciler {
    livedns_client: Box<dyn LiveDnsApi>,
    nodes: Store<Node>,
    dns_names: Vec<String>,
    dns_zone: String,
    last_ips: Vec<String>,
}

impl Reconciler {
    /// Creates a new reconciler instance.
    pub fn new(
        livedns_client: Box<dyn LiveDnsApi>,
        nodes: Store<Node>,
        dns_names: Vec<String>,
        dns_zone: String,
    ) -> Self {
        Self {
            livedns_client,
            nodes,
            dns_names,
            dns_zone,
            last_ips: Vec::new(),
        }
    }

    /// Runs one reconciliation cycle.
    ///
    /// A no-op when the ready external IP set matches the last pushed one.
    /// Otherwise every configured name gets one A record carrying the full
    /// new value list (possibly empty, when no ready node has an external
    /// IP), submitted as a single batch.
    pub async fn reconcile(&mut self) -> Result<(), ControllerError> {
        debug!("Resyncing node IP set");

        let nodes = self.nodes.state();
        let ips = ready_external_ips(nodes.iter().map(|node| node.as_ref()));

        if ips.join(",") == self.last_ips.join(",") {
            debug!("No change detected: {:?}", ips);
            return Ok(());
        }
        info!("New node IPs detected: {:?} (was {:?})", ips, self.last_ips);

        let records: Vec<ZoneRecord> = self
            .dns_names
            .iter()
            .map(|name| ZoneRecord {
                rrset_type: "A".to_string(),
                rrset_name: name.clone(),
                rrset_ttl: RECORD_TTL_SECONDS,
                rrset_values: ips.clone(),
            })
            .collect();

        self.livedns_client
            .change_domain_records(&self.dns_zone, &records)
            .await?;

        info!("Zone records updated: {:?} -> {:?}", self.dns_names, ips);

        // Committed only after the provider accepted the batch, so a failed
        // push is retried on the next node event even if the set is unchanged.
        self.last_ips = ips;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn last_ips(&self) -> &[String] {
        &self.last_ips
    }
}
