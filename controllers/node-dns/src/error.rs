//! Controller-specific error types.
//!
//! This module defines error types specific to the node DNS controller
//! that are not covered by upstream library errors.

use kube::Error as KubeError;
use livedns_client::LiveDnsError;
use thiserror::Error;

/// Errors that can occur in the node DNS controller.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Kubernetes API error
    #[error("Kubernetes error: {0}")]
    Kube(#[from] KubeError),

    /// LiveDNS API error
    #[error("LiveDNS error: {0}")]
    LiveDns(#[from] LiveDnsError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid node label selector expression
    #[error("Invalid node selector: {0}")]
    InvalidSelector(String),

    /// Resource watch failed
    #[error("Resource watch failed: {0}")]
    Watch(String),
}
