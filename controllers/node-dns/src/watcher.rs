//! Kubernetes node watcher.
//!
//! This module consumes the node watch stream and triggers one
//! reconciliation cycle per inventory event. The stream is wrapped in a
//! reflector so the reconciler always lists nodes from the in-memory cache
//! rather than the API server.

use crate::error::ControllerError;
use crate::reconciler::Reconciler;
use futures::StreamExt;
use k8s_openapi::api::core::v1::Node;
use kube::Api;
use kube_runtime::reflector::store::Writer;
use kube_runtime::{reflector, watcher};
use tracing::{debug, error, info};

/// Watches cluster nodes for changes.
pub struct Watcher {
    reconciler: Reconciler,
    node_api: Api<Node>,
    store_writer: Writer<Node>,
    watch_config: watcher::Config,
}

impl Watcher {
    /// Creates a new watcher instance.
    pub fn new(
        reconciler: Reconciler,
        node_api: Api<Node>,
        store_writer: Writer<Node>,
        watch_config: watcher::Config,
    ) -> Self {
        Self {
            reconciler,
            node_api,
            store_writer,
            watch_config,
        }
    }

    /// Starts watching nodes.
    ///
    /// Every add, update, or delete triggers exactly one reconciliation
    /// cycle, run on this task before the next event is taken, so cycles
    /// never overlap. Which node changed is irrelevant; the cycle always
    /// recomputes the full IP set. Stream errors are transient: the watcher
    /// re-establishes itself, so they are logged and the loop continues.
    pub async fn watch_nodes(self) -> Result<(), ControllerError> {
        info!("Starting node watcher");

        let Self {
            mut reconciler,
            node_api,
            store_writer,
            watch_config,
        } = self;

        let mut stream = Box::pin(reflector(store_writer, watcher(node_api, watch_config)));

        while let Some(event) = stream.next().await {
            match event {
                Ok(watcher::Event::Apply(node)) => {
                    debug!("Node applied: {}", node_name(&node));
                    if let Err(e) = reconciler.reconcile().await {
                        error!("Failed to reconcile after node apply: {}", e);
                    }
                }
                Ok(watcher::Event::Delete(node)) => {
                    info!("Node deleted: {}", node_name(&node));
                    if let Err(e) = reconciler.reconcile().await {
                        error!("Failed to reconcile after node delete: {}", e);
                    }
                }
                Ok(watcher::Event::Init) => {
                    debug!("Node watcher initialized, replaying current nodes");
                }
                Ok(watcher::Event::InitApply(node)) => {
                    debug!("Node init apply: {}", node_name(&node));
                    if let Err(e) = reconciler.reconcile().await {
                        error!("Failed to reconcile during node replay: {}", e);
                    }
                }
                Ok(watcher::Event::InitDone) => {
                    // The store swaps in the full node set here, so this
                    // cycle observes the complete initial inventory.
                    info!("Node watcher initialization complete");
                    if let Err(e) = reconciler.reconcile().await {
                        error!("Failed to reconcile after node replay: {}", e);
                    }
                }
                Err(e) => {
                    error!("Node watch stream error: {}", e);
                }
            }
        }

        Ok(())
    }
}

fn node_name(node: &Node) -> &str {
    node.metadata.name.as_deref().unwrap_or("<unknown>")
}
