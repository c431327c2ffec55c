//! Connector configuration structures

use serde::{Deserialize, Serialize};

/// Settings needed to build a platform service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Base URL of the platform REST API (e.g. `https://api.quickbase.com/v1`)
    pub instance_url: String,
    /// Realm host name, for example `demo.quickbase.com`
    pub host_name: String,
    /// Origin the authentication handshake is addressed to. Defaults to
    /// `https://<host_name>` when absent.
    #[serde(default)]
    pub target_origin: Option<String>,
    /// Optional per-request timeout. No timeout is applied when absent.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ConnectorConfig {
    /// Create a configuration with the two required settings.
    pub fn new(instance_url: impl Into<String>, host_name: impl Into<String>) -> Self {
        Self {
            instance_url: instance_url.into(),
            host_name: host_name.into(),
            target_origin: None,
            timeout_secs: None,
        }
    }

    /// Origin used for the handshake with the owning process.
    #[must_use]
    pub fn handshake_origin(&self) -> String {
        self.target_origin.clone().unwrap_or_else(|| format!("https://{}", self.host_name))
    }
}
