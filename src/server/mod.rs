use crate::core::intake::IntakeService;
use crate::domain::model::SubmissionRequest;
use crate::domain::ports::{ConfigProvider, Mailer};
use crate::utils::error::IntakeError;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;

pub struct AppState<M: Mailer, C: ConfigProvider> {
    intake: Arc<IntakeService<M, C>>,
}

impl<M: Mailer, C: ConfigProvider> AppState<M, C> {
    pub fn new(intake: IntakeService<M, C>) -> Self {
        Self {
            intake: Arc::new(intake),
        }
    }
}

impl<M: Mailer, C: ConfigProvider> Clone for AppState<M, C> {
    fn clone(&self) -> Self {
        Self {
            intake: Arc::clone(&self.intake),
        }
    }
}

pub fn build_router<M, C>(state: AppState<M, C>) -> Router
where
    M: Mailer + 'static,
    C: ConfigProvider + 'static,
{
    Router::new()
        .route("/api/contact", post(submit_contact::<M, C>))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// POST /api/contact
///
/// Accepts the form payload, re-validates it and forwards the notification
/// email. Every failure mode maps to the `{"error": ...}` envelope.
async fn submit_contact<M, C>(State(state): State<AppState<M, C>>, body: Bytes) -> Response
where
    M: Mailer + 'static,
    C: ConfigProvider + 'static,
{
    // Parsed by hand so a malformed body lands in the generic failure path
    // instead of an extractor rejection with its own wire format.
    let request: SubmissionRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::error!("Error sending contact email: {}", err);
            return error_response(&IntakeError::SerializationError(err));
        }
    };

    match state.intake.handle(request).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "ok": true }))).into_response(),
        Err(err) => {
            // Validation failures are the caller's problem; everything else
            // is logged here and kept out of the response body.
            if !err.is_client_error() {
                tracing::error!("Error sending contact email: {}", err);
            }
            error_response(&err)
        }
    }
}

fn error_response(err: &IntakeError) -> Response {
    let (status, message) = match err {
        IntakeError::MissingRequiredFields | IntakeError::InvalidEmailFormat => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        IntakeError::MissingApiKey => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to send email".to_string(),
        ),
    };

    (status, Json(json!({ "error": message }))).into_response()
}
