//! Error taxonomy for the submission pipeline and transport adapters.

use thiserror::Error;

/// Errors from a single transport attempt.
///
/// A configuration error is transport-equivalent for fallback purposes:
/// the coordinator skips straight to the next transport without any
/// network call having been made.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("not configured: {0}")]
    Configuration(String),
}

/// Validation failures detected before any network attempt.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("invalid email format: '{0}'")]
    InvalidEmail(String),
}

/// Errors surfaced by the submission coordinator.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Every transport in the chain failed. The summary aggregates each
    /// attempt's error, in attempt order.
    #[error("all transports failed: {summary}")]
    Exhausted { summary: String },
}
