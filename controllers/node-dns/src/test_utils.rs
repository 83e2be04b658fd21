//! Test utilities for unit testing the reconciler
//!
//! This module provides helpers for creating node fixtures and setting up
//! store-backed reconcilers against a mock LiveDNS client.

use crate::reconciler::Reconciler;
use k8s_openapi::api::core::v1::{Node, NodeAddress, NodeCondition, NodeStatus};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube_runtime::reflector;
use kube_runtime::reflector::store::Writer;
use kube_runtime::watcher;
use livedns_client::MockLiveDnsClient;

/// Helper to create a test node
///
/// `ready_status` is the value of the `Ready` condition, or `None` for a
/// node carrying no conditions at all.
pub fn create_test_node(name: &str, ready_status: Option<&str>, external_ips: &[&str]) -> Node {
    create_test_node_with_addresses(name, ready_status, external_ips, &[])
}

/// Helper to create a test node with both external and internal addresses
pub fn create_test_node_with_addresses(
    name: &str,
    ready_status: Option<&str>,
    external_ips: &[&str],
    internal_ips: &[&str],
) -> Node {
    let conditions = ready_status.map(|status| {
        vec![NodeCondition {
            type_: "Ready".to_string(),
            status: status.to_string(),
            ..Default::default()
        }]
    });

    let mut addresses: Vec<NodeAddress> = external_ips
        .iter()
        .map(|ip| NodeAddress {
            type_: "ExternalIP".to_string(),
            address: ip.to_string(),
        })
        .collect();
    addresses.extend(internal_ips.iter().map(|ip| NodeAddress {
        type_: "InternalIP".to_string(),
        address: ip.to_string(),
    }));

    Node {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        spec: None,
        status: Some(NodeStatus {
            conditions,
            addresses: Some(addresses),
            ..Default::default()
        }),
    }
}

/// Helper to create a reconciler over the given nodes, backed by a mock
/// LiveDNS client
///
/// The returned writer can apply further watch events to change the node
/// set between cycles.
pub fn create_test_reconciler(
    nodes: Vec<Node>,
    dns_names: &[&str],
    dns_zone: &str,
) -> (Reconciler, MockLiveDnsClient, Writer<Node>) {
    let client = MockLiveDnsClient::new("http://livedns.test");
    let (store, mut writer) = reflector::store();

    for node in nodes {
        writer.apply_watcher_event(&watcher::Event::Apply(node));
    }

    let reconciler = Reconciler::new(
        Box::new(client.clone()),
        store,
        dns_names.iter().map(|name| name.to_string()).collect(),
        dns_zone.to_string(),
    );

    (reconciler, client, writer)
}
