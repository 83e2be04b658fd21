//! Node DNS Controller
//!
//! Keeps a fixed set of LiveDNS A records pointed at the external IP
//! addresses of the cluster's ready nodes.
//!
//! The controller watches nodes, recomputes the ready external IP set on
//! every inventory change, and replaces the managed record sets in a single
//! LiveDNS call whenever the set differs from the last pushed one.

mod config;
mod controller;
mod error;
mod reconcile_helpers;
mod reconciler;
#[cfg(test)]
mod test_utils;
mod watcher;

use crate::config::Config;
use crate::error::ControllerError;
use controller::Controller;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), ControllerError> {
    // Logging must be up before configuration validation so fatal
    // misconfiguration is visible in the process output.
    init_tracing(config::human_logs());

    info!("Starting node DNS controller");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e);
        }
    };

    info!("Configuration:");
    info!("  DNS zone: {}", config.dns_zone);
    info!("  DNS names: {}", config.dns_names.join(", "));
    info!(
        "  Node selector: {}",
        config
            .node_selector
            .as_ref()
            .map(|selector| selector.to_string())
            .unwrap_or_else(|| "all nodes".to_string())
    );

    // Initialize and run controller
    let controller = match Controller::new(config).await {
        Ok(controller) => controller,
        Err(e) => {
            error!("Failed to initialize controller: {}", e);
            return Err(e);
        }
    };
    controller.run().await
}

fn init_tracing(human_logs: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if human_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    }
}
