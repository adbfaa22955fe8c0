// src/routes/lex.rs
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::extract::ValidJson;
use crate::{
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn send_message_handler(
    State(state): State<SharedState>,
    ValidJson(payload): ValidJson<ChatRequest>,
) -> (StatusCode, Json<ChatResponse>) {
    tracing::info!(session_id = %payload.session_id, "Received message request");

    match state.gateway.send_message(&payload).await {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(e) => {
            tracing::error!(session_id = %payload.session_id, error = ?e, "Error processing message");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ChatResponse::processing_error()))
        }
    }
}

pub async fn delete_session_handler(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> (StatusCode, &'static str) {
    tracing::info!(session_id = %session_id, "Deleting session");

    match state.gateway.delete_session(&session_id).await {
        Ok(()) => (StatusCode::OK, "Session deleted successfully"),
        Err(e) => {
            tracing::error!(session_id = %session_id, error = ?e, "Error deleting session");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error deleting session")
        }
    }
}

pub async fn get_session_handler(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Response {
    tracing::info!(session_id = %session_id, "Getting session info");

    match state.gateway.get_session(&session_id).await {
        Ok(info) => Json(info).into_response(),
        Err(e) => {
            tracing::error!(session_id = %session_id, error = ?e, "Error getting session");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn health_handler() -> &'static str {
    "Lex integration is running"
}
