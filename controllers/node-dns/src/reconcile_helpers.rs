//! Helper functions for the node reconciliation cycle.
//!
//! Pure functions over node objects; no clients, no side effects.

use k8s_openapi::api::core::v1::Node;

/// Returns true when the node reports a true `Ready` condition.
///
/// A missing status, a missing `Ready` condition, or a `Ready` condition
/// with any status other than `"True"` (False, Unknown) all count as
/// not ready.
pub fn node_is_ready(node: &Node) -> bool {
    node.status
        .as_ref()
        .and_then(|status| status.conditions.as_ref())
        .is_some_and(|conditions| {
            conditions
                .iter()
                .any(|condition| condition.type_ == "Ready" && condition.status == "True")
        })
}

/// Collects the `ExternalIP` addresses of every ready node, sorted ascending.
///
/// A node may contribute zero, one, or several addresses; values are kept
/// as-is, with no deduplication across nodes. The result only depends on
/// the set of input nodes, not their order.
pub fn ready_external_ips<'a, I>(nodes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Node>,
{
    let mut ips = Vec::new();

    for node in nodes {
        if !node_is_ready(node) {
            continue;
        }
        let Some(addresses) = node.status.as_ref().and_then(|status| status.addresses.as_ref())
        else {
            continue;
        };
        for address in addresses {
            if address.type_ == "ExternalIP" {
                ips.push(address.address.clone());
            }
        }
    }

    ips.sort();
    ips
}
