use std::any::Any;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::AppState;
use crate::models::{MessagePayload, Outcome};

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

// ============================================================
// Messages
// ============================================================

/// Turn a chat message into a backlog story.
///
/// A body that is absent, not JSON, or has no string `message` counts as no
/// message at all.
pub async fn receive_message(
    State(state): State<AppState>,
    payload: Result<Json<MessagePayload>, JsonRejection>,
) -> Outcome {
    match payload {
        Ok(Json(payload)) => state.pipeline().run(payload.message.as_deref()).await,
        Err(rejection) => {
            tracing::warn!("Unreadable message payload: {}", rejection.body_text());
            Outcome::Rejected
        }
    }
}

/// Last-resort 500 for a panic anywhere below the router.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let reason = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("Internal server error");

    tracing::error!("Request handler panicked: {}", reason);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": reason })),
    )
        .into_response()
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Rejected => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "No message provided." })),
            )
                .into_response(),
            Outcome::Skipped { reason } => {
                (StatusCode::OK, Json(json!({ "info": reason.message() }))).into_response()
            }
            Outcome::Created { task, subtasks } => (
                StatusCode::CREATED,
                Json(json!({
                    "message": "Task created successfully.",
                    "task": task,
                    "subtasks": subtasks,
                })),
            )
                .into_response(),
            Outcome::Failed { reason } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": reason })),
            )
                .into_response(),
        }
    }
}
