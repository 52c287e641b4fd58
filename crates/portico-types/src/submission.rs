//! Contact-form submission types.
//!
//! A [`FormSubmission`] is a transient value object built from user input.
//! It is validated, handed to the transport chain, and not retained after
//! the coordinator completes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::error::SubmitError;

/// Subject used when the visitor left the field empty.
pub const DEFAULT_SUBJECT: &str = "Contact Form Submission";

/// A single contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
}

impl FormSubmission {
    /// Build a submission from raw form values.
    ///
    /// Fields are trimmed; an empty subject falls back to
    /// [`DEFAULT_SUBJECT`]. The submission timestamp is taken now.
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        let subject = subject.trim();
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            subject: if subject.is_empty() {
                DEFAULT_SUBJECT.to_string()
            } else {
                subject.to_string()
            },
            message: message.trim().to_string(),
            submitted_at: Utc::now(),
            source_ip: None,
        }
    }

    /// Attach the submitter's address (server-side intake only).
    pub fn with_source_ip(mut self, ip: impl Into<String>) -> Self {
        self.source_ip = Some(ip.into());
        self
    }
}

/// Which concrete network path delivered (or tried to deliver) a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// The hosted relay service (persists and notifies server-side).
    Relay,
    /// Direct REST write into the hosted datastore.
    Datastore,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Relay => write!(f, "relay"),
            TransportKind::Datastore => write!(f, "datastore"),
        }
    }
}

impl FromStr for TransportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relay" => Ok(TransportKind::Relay),
            "datastore" => Ok(TransportKind::Datastore),
            other => Err(format!("invalid transport kind: '{other}'")),
        }
    }
}

/// Proof of delivery returned by a transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportReceipt {
    pub transport: TransportKind,
    /// Identifier assigned by the receiving system, when it returns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Final outcome of one `submit` call.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// One transport in the chain accepted the submission.
    Delivered(TransportReceipt),
    /// The idempotency guard dropped the call (a submission is already in
    /// flight or completed).
    Skipped,
    /// Validation rejected the submission, or every transport failed.
    Failed(SubmitError),
}

impl SubmissionOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmissionOutcome::Delivered(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, SubmissionOutcome::Skipped)
    }
}

/// Wire body for the relay's `/submit-form` and `/notify-whatsapp` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitFormBody {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<&FormSubmission> for SubmitFormBody {
    fn from(submission: &FormSubmission) -> Self {
        Self {
            name: submission.name.clone(),
            email: submission.email.clone(),
            subject: submission.subject.clone(),
            message: submission.message.clone(),
        }
    }
}

/// Wire response from the relay's `/submit-form` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitFormResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_fields_and_defaults_subject() {
        let submission = FormSubmission::new("  Ada  ", " ada@example.com ", "  ", "hello");
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.subject, DEFAULT_SUBJECT);
        assert_eq!(submission.message, "hello");
        assert!(submission.source_ip.is_none());
    }

    #[test]
    fn explicit_subject_is_kept() {
        let submission = FormSubmission::new("Ada", "ada@example.com", "Quote", "hello");
        assert_eq!(submission.subject, "Quote");
    }

    #[test]
    fn transport_kind_roundtrip() {
        for kind in [TransportKind::Relay, TransportKind::Datastore] {
            let s = kind.to_string();
            let parsed: TransportKind = s.parse().unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn submit_form_body_from_submission() {
        let submission = FormSubmission::new("Ada", "ada@example.com", "", "hello");
        let body = SubmitFormBody::from(&submission);
        assert_eq!(body.name, "Ada");
        assert_eq!(body.subject, DEFAULT_SUBJECT);
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"email\":\"ada@example.com\""));
    }

    #[test]
    fn submit_form_response_id_is_optional() {
        let parsed: SubmitFormResponse =
            serde_json::from_str(r#"{"success":true,"message":"Form submitted successfully"}"#)
                .unwrap();
        assert!(parsed.success);
        assert!(parsed.id.is_none());

        let parsed: SubmitFormResponse = serde_json::from_str(
            r#"{"success":true,"message":"ok","id":"0198c0de-0000-7000-8000-000000000000"}"#,
        )
        .unwrap();
        assert!(parsed.id.is_some());
    }

    #[test]
    fn outcome_predicates() {
        let delivered = SubmissionOutcome::Delivered(TransportReceipt {
            transport: TransportKind::Relay,
            reference: None,
        });
        assert!(delivered.is_delivered());
        assert!(!delivered.is_skipped());
        assert!(SubmissionOutcome::Skipped.is_skipped());
    }
}
