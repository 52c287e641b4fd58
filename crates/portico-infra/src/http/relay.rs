//! Relay service adapters -- transport A and its notification sub-endpoint.
//!
//! The hosted relay persists the submission and dispatches the owner
//! notification server-side, so [`RelayTransport::handles_notification`]
//! is true and the coordinator skips the client-side notifier after a
//! relay delivery.

use std::time::Duration;

use portico_core::submission::transport::{FormTransport, Notifier};
use portico_types::error::TransportError;
use portico_types::submission::{
    FormSubmission, SubmitFormBody, SubmitFormResponse, TransportKind, TransportReceipt,
};

use super::error_from_response;

fn relay_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("failed to create reqwest client")
}

/// Transport A: POST `{base}/submit-form`.
pub struct RelayTransport {
    client: reqwest::Client,
    base_url: String,
}

impl RelayTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: relay_client(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl FormTransport for RelayTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::Relay
    }

    fn handles_notification(&self) -> bool {
        true
    }

    async fn deliver(
        &self,
        submission: &FormSubmission,
    ) -> Result<TransportReceipt, TransportError> {
        let body = SubmitFormBody::from(submission);

        let response = self
            .client
            .post(self.url("/submit-form"))
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let parsed: SubmitFormResponse = response
            .json()
            .await
            .map_err(|e| TransportError::Malformed(format!("failed to parse response: {e}")))?;

        Ok(TransportReceipt {
            transport: TransportKind::Relay,
            reference: parsed.id,
        })
    }
}

/// Best-effort notifier: POST `{base}/notify-whatsapp`, response ignored.
pub struct RelayNotifier {
    client: reqwest::Client,
    base_url: String,
}

impl RelayNotifier {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: relay_client(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Notifier for RelayNotifier {
    async fn notify(&self, submission: FormSubmission) {
        let body = SubmitFormBody::from(&submission);

        // Fire-and-forget: the response, including error statuses, is
        // ignored entirely.
        match self.client.post(self.url("/notify-whatsapp")).json(&body).send().await {
            Ok(_) => {}
            Err(err) => {
                tracing::debug!(error = %err, "notification request failed (ignored)");
            }
        }
    }
}
