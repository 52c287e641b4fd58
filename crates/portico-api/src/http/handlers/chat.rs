//! POST /api/chat -- answer a visitor question.
//!
//! Answers against the client-supplied knowledge base when present,
//! otherwise the builtin snapshot. When an upstream completion service is
//! configured the handler defers to it first; any upstream failure or
//! empty answer falls back to the local responder, so the endpoint itself
//! never fails past validation.

use axum::Json;
use axum::extract::State;

use portico_core::responder;
use portico_types::chat::{ChatAnswer, ChatQuery};

use crate::http::error::AppError;
use crate::state::AppState;

pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatQuery>,
) -> Result<Json<ChatAnswer>, AppError> {
    if body.message.trim().is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }

    let kb = body.knowledge_base.as_ref().unwrap_or(&state.kb);

    let response = match &state.upstream {
        Some(upstream) => match upstream.complete(&body.message, kb).await {
            Ok(answer) if !answer.trim().is_empty() => answer,
            Ok(_) => responder::respond(&body.message, kb),
            Err(err) => {
                tracing::warn!(error = %err, "upstream completion failed, answering locally");
                responder::respond(&body.message, kb)
            }
        },
        None => responder::respond(&body.message, kb),
    };

    Ok(Json(ChatAnswer { response }))
}
