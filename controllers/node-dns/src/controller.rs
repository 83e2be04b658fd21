//! Main controller implementation.
//!
//! This module contains the `Controller` struct that wires the Kubernetes
//! client, the LiveDNS client, and the node watcher together, and runs the
//! whole assembly until a shutdown signal arrives.

use crate::config::Config;
use crate::error::ControllerError;
use crate::reconciler::Reconciler;
use crate::watcher::Watcher;
use k8s_openapi::api::core::v1::Node;
use kube::{Api, Client};
use kube_runtime::{reflector, watcher};
use livedns_client::LiveDnsClient;
use tokio::signal::unix::{signal, SignalKind};
use tokio::task::JoinHandle;
use tracing::info;

/// Main controller for node-backed DNS records.
pub struct Controller {
    node_watcher: JoinHandle<Result<(), ControllerError>>,
}

impl Controller {
    /// Creates a new controller instance and starts the node watch task.
    pub async fn new(config: Config) -> Result<Self, ControllerError> {
        info!("Initializing node DNS controller");

        // Create Kubernetes client
        let kube_client = Client::try_default().await?;

        // Create LiveDNS client
        let livedns_client = LiveDnsClient::new(config.livedns_key)?;

        let node_api: Api<Node> = Api::all(kube_client);

        // The node selector is applied server-side, so the watch cache only
        // ever holds matching nodes.
        let watch_config = match &config.node_selector {
            Some(selector) => watcher::Config::default().labels_from(selector),
            None => watcher::Config::default(),
        };

        // The reflector store is the cached list view the reconciler reads;
        // the watcher task keeps it current.
        let (node_store, store_writer) = reflector::store();

        let reconciler = Reconciler::new(
            Box::new(livedns_client),
            node_store,
            config.dns_names,
            config.dns_zone,
        );

        let watcher_instance = Watcher::new(reconciler, node_api, store_writer, watch_config);

        let node_watcher = tokio::spawn(async move { watcher_instance.watch_nodes().await });

        Ok(Self { node_watcher })
    }

    /// Runs the controller until shutdown.
    pub async fn run(mut self) -> Result<(), ControllerError> {
        info!("Node DNS controller running");

        tokio::select! {
            shutdown = shutdown_signal() => {
                shutdown?;
                info!("Shutdown signal received, stopping node watcher");
                self.node_watcher.abort();
            }
            result = &mut self.node_watcher => {
                result
                    .map_err(|e| ControllerError::Watch(format!("Node watcher panicked: {}", e)))??;
            }
        }

        Ok(())
    }
}

/// Completes when SIGINT or SIGTERM is received.
async fn shutdown_signal() -> Result<(), ControllerError> {
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| ControllerError::Watch(format!("Failed to install SIGTERM handler: {}", e)))?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
    }

    Ok(())
}
