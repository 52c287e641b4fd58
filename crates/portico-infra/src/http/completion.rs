//! HTTP completion client -- concrete [`CompletionBackend`] for the remote
//! `/chat` endpoint.
//!
//! Sends `{"message", "knowledgeBase"}` and expects `{"response"}`. Any
//! non-success status, network failure, or malformed body becomes a
//! [`TransportError`]; the caller (`Assistant`) resolves those with the
//! local responder.

use std::time::Duration;

use portico_core::assistant::CompletionBackend;
use portico_types::chat::{ChatAnswer, ChatQuery};
use portico_types::error::TransportError;
use portico_types::knowledge::KnowledgeBase;

use super::error_from_response;

/// Completion client for the hosted support API.
pub struct HttpCompletionBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCompletionBackend {
    /// Chat answers should feel interactive; cap the wait well below the
    /// client library default.
    const TIMEOUT: Duration = Duration::from_secs(20);

    /// Create a client against `base_url` (e.g. `http://localhost:3000/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl CompletionBackend for HttpCompletionBackend {
    fn name(&self) -> &str {
        "http-completion"
    }

    async fn complete(
        &self,
        message: &str,
        kb: &KnowledgeBase,
    ) -> Result<String, TransportError> {
        let body = ChatQuery {
            message: message.to_string(),
            knowledge_base: Some(kb.clone()),
        };

        let response = self
            .client
            .post(self.url("/chat"))
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let answer: ChatAnswer = response
            .json()
            .await
            .map_err(|e| TransportError::Malformed(format!("failed to parse response: {e}")))?;

        Ok(answer.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_joined_onto_the_base() {
        let backend = HttpCompletionBackend::new("http://localhost:3000/api");
        assert_eq!(backend.url("/chat"), "http://localhost:3000/api/chat");
    }

    #[test]
    fn backend_name_is_stable() {
        let backend = HttpCompletionBackend::new("http://localhost:3000/api");
        assert_eq!(CompletionBackend::name(&backend), "http-completion");
    }
}
