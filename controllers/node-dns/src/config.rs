//! Environment configuration.
//!
//! All settings are read once at startup. Validation failures here are
//! fatal and happen before any cluster client is constructed.

use crate::error::ControllerError;
use kube::core::Selector;
use std::env;
use std::str::FromStr;

/// Validated controller configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// LiveDNS API key
    pub livedns_key: String,
    /// Record names to manage, all within `dns_zone`
    pub dns_names: Vec<String>,
    /// The zone owning every managed record
    pub dns_zone: String,
    /// Optional label selector restricting which nodes are watched
    pub node_selector: Option<Selector>,
}

impl Config {
    /// Load and validate the configuration from environment variables.
    pub fn from_env() -> Result<Self, ControllerError> {
        let livedns_key = required_var("GANDI_LIVEDNS_KEY")?;
        let dns_names = parse_dns_names(&env::var("DNS_NAMES").unwrap_or_default())?;
        let dns_zone = required_var("DNS_ZONE")?;

        let node_selector = match env::var("NODE_SELECTOR") {
            Ok(raw) if !raw.trim().is_empty() => Some(parse_node_selector(&raw)?),
            _ => None,
        };

        Ok(Self {
            livedns_key,
            dns_names,
            dns_zone,
            node_selector,
        })
    }
}

/// Whether human-readable log output was requested via HUMAN_LOGS.
///
/// Read separately from [`Config::from_env`] so logging can be initialized
/// before configuration validation runs.
pub fn human_logs() -> bool {
    env::var("HUMAN_LOGS").map(|v| !v.is_empty()).unwrap_or(false)
}

fn required_var(name: &str) -> Result<String, ControllerError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ControllerError::InvalidConfig(format!(
            "{} environment variable is required",
            name
        ))),
    }
}

/// Split the comma-separated DNS name list, dropping empty segments.
fn parse_dns_names(raw: &str) -> Result<Vec<String>, ControllerError> {
    let names: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        return Err(ControllerError::InvalidConfig(
            "DNS_NAMES environment variable is required".to_string(),
        ));
    }

    Ok(names)
}

fn parse_node_selector(raw: &str) -> Result<Selector, ControllerError> {
    Selector::from_str(raw).map_err(|e| {
        ControllerError::InvalidSelector(format!("node selector {:?} is invalid: {}", raw, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dns_names_splits_and_trims() {
        let names = parse_dns_names("a.example.com, b.example.com").unwrap();
        assert_eq!(names, vec!["a.example.com", "b.example.com"]);
    }

    #[test]
    fn test_parse_dns_names_single_name() {
        let names = parse_dns_names("a.example.com").unwrap();
        assert_eq!(names, vec!["a.example.com"]);
    }

    #[test]
    fn test_parse_dns_names_rejects_empty_string() {
        assert!(parse_dns_names("").is_err());
    }

    #[test]
    fn test_parse_dns_names_rejects_only_separators() {
        assert!(parse_dns_names(", ,").is_err());
    }

    #[test]
    fn test_parse_node_selector_accepts_equality_expressions() {
        assert!(parse_node_selector("node-role.kubernetes.io/worker=true").is_ok());
        assert!(parse_node_selector("environment!=dev").is_ok());
    }

    #[test]
    fn test_parse_node_selector_rejects_invalid_grammar() {
        assert!(parse_node_selector("not a selector!!!").is_err());
    }
}
