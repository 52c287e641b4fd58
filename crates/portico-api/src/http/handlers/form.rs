//! POST /api/submit-form and /api/notify-whatsapp.
//!
//! The submit endpoint is transport A's server side: it persists to the
//! datastore when one is configured and reports success with the assigned
//! id. The notify endpoint accepts the same body and relays it to the
//! configured webhook without awaiting the outcome -- the response is sent
//! immediately and never reflects the relay result.

use axum::Json;
use axum::extract::State;
use serde_json::json;

use portico_core::submission::transport::FormTransport;
use portico_types::submission::{FormSubmission, SubmitFormBody, SubmitFormResponse};

use crate::http::error::AppError;
use crate::state::AppState;

fn require_all_fields(body: &SubmitFormBody) -> Result<(), AppError> {
    let complete = !body.name.trim().is_empty()
        && !body.email.trim().is_empty()
        && !body.subject.trim().is_empty()
        && !body.message.trim().is_empty();
    if complete {
        Ok(())
    } else {
        Err(AppError::Validation("All fields are required".to_string()))
    }
}

pub async fn submit_form(
    State(state): State<AppState>,
    Json(body): Json<SubmitFormBody>,
) -> Result<Json<SubmitFormResponse>, AppError> {
    require_all_fields(&body)?;

    let submission = FormSubmission::new(&body.name, &body.email, &body.subject, &body.message);

    let id = match &state.datastore {
        Some(datastore) => {
            let receipt = datastore
                .deliver(&submission)
                .await
                .map_err(AppError::Datastore)?;
            tracing::info!(id = receipt.reference.as_deref(), "form saved to datastore");
            receipt.reference
        }
        None => {
            tracing::warn!("datastore not configured - form not saved");
            None
        }
    };

    Ok(Json(SubmitFormResponse {
        success: true,
        message: "Form submitted successfully".to_string(),
        id,
    }))
}

pub async fn notify_whatsapp(
    State(state): State<AppState>,
    Json(body): Json<SubmitFormBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_all_fields(&body)?;

    let submission = FormSubmission::new(&body.name, &body.email, &body.subject, &body.message);

    match &state.notifier {
        Some(notifier) => {
            let notifier = notifier.clone();
            tokio::spawn(async move {
                notifier.notify(submission).await;
            });
        }
        None => {
            tracing::debug!("notification relay not configured - request dropped");
        }
    }

    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use portico_types::config::PorticoConfig;

    fn state() -> AppState {
        AppState::init(PorticoConfig::default())
    }

    fn body(subject: &str) -> SubmitFormBody {
        SubmitFormBody {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            subject: subject.to_string(),
            message: "hi".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_field_is_rejected() {
        let result = submit_form(State(state()), Json(body(""))).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn without_datastore_submission_succeeds_with_no_id() {
        let Json(response) = submit_form(State(state()), Json(body("Quote")))
            .await
            .unwrap();
        assert!(response.success);
        assert!(response.id.is_none());
    }

    #[tokio::test]
    async fn notify_returns_immediately_without_a_relay() {
        let Json(response) = notify_whatsapp(State(state()), Json(body("Quote")))
            .await
            .unwrap();
        assert_eq!(response, json!({ "success": true }));
    }
}
