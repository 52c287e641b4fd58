//! HTTP adapters for the external collaborators.
//!
//! One adapter per external system: the hosted relay, the datastore's REST
//! surface, the completion endpoint, and the notification webhook. Each is
//! a thin request/response wrapper; retry and fallback policy live in
//! `portico-core`.

pub mod completion;
pub mod datastore;
pub mod relay;
pub mod webhook;

use portico_types::error::TransportError;

/// Pull a human-readable message out of an error body.
///
/// Collaborators disagree on the field name (`message`, `error`,
/// `error_description`); fall back to the raw body, then to `fallback`.
pub(crate) fn failure_message(body: &str, fallback: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error", "error_description"] {
            if let Some(message) = value.get(key).and_then(|m| m.as_str()) {
                return message.to_string();
            }
        }
    }
    if body.trim().is_empty() {
        fallback.to_string()
    } else {
        body.to_string()
    }
}

/// Map a non-2xx response into a uniform [`TransportError`].
pub(crate) async fn error_from_response(response: reqwest::Response) -> TransportError {
    let status = response.status();
    let fallback = status.canonical_reason().unwrap_or("unknown error").to_string();
    let body = response.text().await.unwrap_or_default();
    TransportError::Http {
        status: status.as_u16(),
        message: failure_message(&body, &fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_prefers_message_field() {
        let body = r#"{"message":"row level security violation","code":"42501"}"#;
        assert_eq!(failure_message(body, "x"), "row level security violation");
    }

    #[test]
    fn failure_message_reads_error_and_error_description() {
        assert_eq!(
            failure_message(r#"{"error":"Message is required"}"#, "x"),
            "Message is required"
        );
        assert_eq!(
            failure_message(r#"{"error_description":"bad key"}"#, "x"),
            "bad key"
        );
    }

    #[test]
    fn failure_message_falls_back_to_raw_body_then_reason() {
        assert_eq!(failure_message("plain text error", "x"), "plain text error");
        assert_eq!(failure_message("", "Internal Server Error"), "Internal Server Error");
        assert_eq!(failure_message("  ", "Bad Gateway"), "Bad Gateway");
    }
}
