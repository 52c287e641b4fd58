//! Direct datastore write -- transport B.
//!
//! POSTs the submission into the datastore's REST surface
//! (`/rest/v1/contact_submissions`) with API-key headers. Unconfigured or
//! placeholder credentials reject locally with a configuration error
//! before any network call, which the coordinator treats like any other
//! transport failure.
//!
//! The API key is wrapped in [`secrecy::SecretString`]; this type
//! intentionally does not derive `Debug`.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use portico_core::submission::transport::FormTransport;
use portico_types::config::DatastoreConfig;
use portico_types::error::TransportError;
use portico_types::submission::{FormSubmission, SubmitFormBody, TransportKind, TransportReceipt};

use super::error_from_response;

/// Transport B: direct REST insert into the hosted datastore.
pub struct DatastoreTransport {
    client: reqwest::Client,
    url: Option<String>,
    api_key: Option<SecretString>,
    configured: bool,
}

impl DatastoreTransport {
    /// Table the contact form writes into.
    const TABLE_PATH: &'static str = "/rest/v1/contact_submissions";

    pub fn new(config: &DatastoreConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            url: config.url.clone(),
            api_key: config.api_key.clone().map(SecretString::from),
            configured: config.is_configured(),
        }
    }

    /// Whether credentials are usable (present and not placeholders).
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    fn insert_url(&self) -> Option<String> {
        self.url.as_ref().map(|base| format!("{base}{}", Self::TABLE_PATH))
    }
}

impl FormTransport for DatastoreTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::Datastore
    }

    fn handles_notification(&self) -> bool {
        // A direct write stores the row and nothing else; the coordinator
        // must notify separately.
        false
    }

    async fn deliver(
        &self,
        submission: &FormSubmission,
    ) -> Result<TransportReceipt, TransportError> {
        if !self.configured {
            return Err(TransportError::Configuration(
                "datastore credentials missing or placeholder".to_string(),
            ));
        }
        let (url, api_key) = match (self.insert_url(), self.api_key.as_ref()) {
            (Some(url), Some(api_key)) => (url, api_key),
            _ => {
                return Err(TransportError::Configuration(
                    "datastore credentials missing or placeholder".to_string(),
                ));
            }
        };

        let body = SubmitFormBody::from(submission);
        let key = api_key.expose_secret();

        let response = self
            .client
            .post(&url)
            .header("apikey", key)
            .header("Authorization", format!("Bearer {key}"))
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        // With return=representation the datastore echoes the inserted rows.
        let rows: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| TransportError::Malformed(format!("failed to parse response: {e}")))?;

        let reference = rows.first().and_then(|row| match row.get("id") {
            Some(serde_json::Value::String(id)) => Some(id.clone()),
            Some(serde_json::Value::Number(id)) => Some(id.to_string()),
            _ => None,
        });

        Ok(TransportReceipt {
            transport: TransportKind::Datastore,
            reference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portico_types::config::{PLACEHOLDER_DATASTORE_KEY, PLACEHOLDER_DATASTORE_URL};

    fn submission() -> FormSubmission {
        FormSubmission::new("A", "a@b.com", "", "hi")
    }

    #[tokio::test]
    async fn unset_credentials_reject_locally() {
        let transport = DatastoreTransport::new(&DatastoreConfig::default());
        assert!(!transport.is_configured());

        let result = transport.deliver(&submission()).await;
        assert!(matches!(result, Err(TransportError::Configuration(_))));
    }

    #[tokio::test]
    async fn placeholder_credentials_reject_locally() {
        let config = DatastoreConfig {
            url: Some(PLACEHOLDER_DATASTORE_URL.to_string()),
            api_key: Some(PLACEHOLDER_DATASTORE_KEY.to_string()),
        };
        let transport = DatastoreTransport::new(&config);

        let result = transport.deliver(&submission()).await;
        assert!(matches!(result, Err(TransportError::Configuration(_))));
    }

    #[test]
    fn insert_url_targets_the_contact_table() {
        let config = DatastoreConfig {
            url: Some("https://db.example.com".to_string()),
            api_key: Some("anon-key".to_string()),
        };
        let transport = DatastoreTransport::new(&config);
        assert_eq!(
            transport.insert_url().unwrap(),
            "https://db.example.com/rest/v1/contact_submissions"
        );
        assert!(transport.is_configured());
        assert!(!FormTransport::handles_notification(&transport));
    }
}
