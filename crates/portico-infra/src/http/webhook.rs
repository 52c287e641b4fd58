//! Webhook notifier -- server-side notification relay.
//!
//! POSTs the full submission (timestamp and source address included) to a
//! configured webhook URL. Best-effort by contract: every failure is
//! swallowed and logged, never propagated.

use std::time::Duration;

use portico_core::submission::transport::Notifier;
use portico_types::submission::FormSubmission;

/// Notifier that relays submissions to an external webhook.
pub struct WebhookNotifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl WebhookNotifier {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            webhook_url: webhook_url.into(),
        }
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }
}

impl Notifier for WebhookNotifier {
    async fn notify(&self, submission: FormSubmission) {
        match self
            .client
            .post(&self.webhook_url)
            .json(&submission)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                tracing::debug!("webhook notification delivered");
            }
            Ok(response) => {
                tracing::warn!(
                    status = response.status().as_u16(),
                    "webhook notification rejected (ignored)"
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "webhook notification failed (ignored)");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_keeps_the_configured_url() {
        let notifier = WebhookNotifier::new("https://hooks.example.com/catch/abc");
        assert_eq!(notifier.webhook_url(), "https://hooks.example.com/catch/abc");
    }

    #[tokio::test]
    async fn notify_swallows_connection_failures() {
        // Nothing listens on this port; the notifier must not panic or
        // propagate the failure.
        let notifier = WebhookNotifier::new("http://127.0.0.1:9/notify");
        notifier.notify(FormSubmission::new("A", "a@b.com", "", "hi")).await;
    }
}
