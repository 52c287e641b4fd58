//! Configuration surface consumed by the transports and the server.
//!
//! All values are supplied by the hosting environment (config file or
//! environment variables -- the loader lives in `portico-infra`). Absent
//! datastore credentials are a recognized, non-fatal state: they disable
//! the direct-datastore transport, nothing else.

use serde::{Deserialize, Serialize};

/// Placeholder value shipped in sample configs for the datastore URL.
pub const PLACEHOLDER_DATASTORE_URL: &str = "your_datastore_url";
/// Placeholder value shipped in sample configs for the datastore key.
pub const PLACEHOLDER_DATASTORE_KEY: &str = "your_datastore_key";

fn default_api_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

/// Credentials for the hosted datastore's REST surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatastoreConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl DatastoreConfig {
    /// Whether both credentials are present and not placeholders.
    ///
    /// Mirrors the gate the original site applied before attempting a
    /// direct write: empty strings and the shipped placeholder values both
    /// count as unconfigured.
    pub fn is_configured(&self) -> bool {
        let url_ok = self
            .url
            .as_deref()
            .is_some_and(|u| !u.is_empty() && u != PLACEHOLDER_DATASTORE_URL);
        let key_ok = self
            .api_key
            .as_deref()
            .is_some_and(|k| !k.is_empty() && k != PLACEHOLDER_DATASTORE_KEY);
        url_ok && key_ok
    }
}

/// Top-level Portico configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PorticoConfig {
    /// Base URL of the hosted support API, e.g. `http://localhost:3000/api`.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default)]
    pub datastore: DatastoreConfig,

    /// Upstream completion endpoint the server defers chat answers to.
    /// When absent the server answers with the local responder only.
    #[serde(default)]
    pub upstream_api_url: Option<String>,

    /// Webhook URL for server-side contact notifications.
    #[serde(default)]
    pub notify_webhook_url: Option<String>,
}

impl Default for PorticoConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            datastore: DatastoreConfig::default(),
            upstream_api_url: None,
            notify_webhook_url: None,
        }
    }
}
