//! Application state wiring the adapters together.
//!
//! `AppState` holds the knowledge base and the concrete infra adapters
//! used by both the CLI and the REST API. The knowledge base is built once
//! at startup and shared by reference; there is no ambient global state.

use std::sync::Arc;

use portico_core::assistant::BoxCompletionBackend;
use portico_core::submission::transport::BoxNotifier;
use portico_infra::http::completion::HttpCompletionBackend;
use portico_infra::http::datastore::DatastoreTransport;
use portico_infra::http::webhook::WebhookNotifier;
use portico_types::config::PorticoConfig;
use portico_types::knowledge::KnowledgeBase;

/// Shared application state for the REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub kb: Arc<KnowledgeBase>,
    pub config: PorticoConfig,
    /// Direct datastore write path; `None` when credentials are absent or
    /// placeholders (a recognized, non-fatal state).
    pub datastore: Option<Arc<DatastoreTransport>>,
    /// Upstream completion service the chat handler defers to, when
    /// configured.
    pub upstream: Option<Arc<BoxCompletionBackend>>,
    /// Server-side notification relay, when configured.
    pub notifier: Option<Arc<BoxNotifier>>,
}

impl AppState {
    /// Wire the state from configuration.
    pub fn init(config: PorticoConfig) -> Self {
        let datastore = if config.datastore.is_configured() {
            Some(Arc::new(DatastoreTransport::new(&config.datastore)))
        } else {
            tracing::warn!("datastore not configured - submissions will not be persisted");
            None
        };

        let upstream = config.upstream_api_url.as_ref().map(|url| {
            Arc::new(BoxCompletionBackend::new(HttpCompletionBackend::new(
                url.clone(),
            )))
        });

        let notifier = config.notify_webhook_url.as_ref().map(|url| {
            Arc::new(BoxNotifier::new(WebhookNotifier::new(url.clone())))
        });

        Self {
            kb: Arc::new(KnowledgeBase::builtin()),
            config,
            datastore,
            upstream,
            notifier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portico_types::config::DatastoreConfig;

    #[test]
    fn unconfigured_state_has_no_adapters() {
        let state = AppState::init(PorticoConfig::default());
        assert!(state.datastore.is_none());
        assert!(state.upstream.is_none());
        assert!(state.notifier.is_none());
        assert_eq!(state.kb.services.len(), 6);
    }

    #[test]
    fn configured_state_wires_every_adapter() {
        let config = PorticoConfig {
            api_base_url: "http://localhost:3000/api".to_string(),
            datastore: DatastoreConfig {
                url: Some("https://db.example.com".to_string()),
                api_key: Some("anon-key".to_string()),
            },
            upstream_api_url: Some("https://upstream.example.com/api".to_string()),
            notify_webhook_url: Some("https://hooks.example.com/catch/abc".to_string()),
        };

        let state = AppState::init(config);
        assert!(state.datastore.is_some());
        assert!(state.upstream.is_some());
        assert!(state.notifier.is_some());
    }
}
