//! Axum router configuration with middleware.
//!
//! All routes are under `/api`. Middleware: permissive CORS (the widget is
//! embedded on a static site served from another origin) and request
//! tracing.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/submit-form", post(handlers::form::submit_form))
        .route("/notify-whatsapp", post(handlers::form::notify_whatsapp))
        .route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /api/health - configuration-aware health check.
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "datastore": if state.datastore.is_some() { "configured" } else { "not configured" },
        "notifier": if state.notifier.is_some() { "configured" } else { "not configured" },
    }))
}
