//! Chat relay route.
//!
//! Prepends the MyDoc persona to the caller's history and new message,
//! forwards the list to the completion provider and wraps the reply with a
//! timestamp.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use mydoc_groq::{ChatMessage, Role};
use tracing::{debug, info};
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::extract::ApiJson;
use crate::schemas::chat::{ChatRequest, ChatResponse, ErrorResponse};
use crate::state::AppState;

/// Persona instruction sent as the first message of every conversation.
pub const SYSTEM_PROMPT: &str = "You are MyDoc, a helpful and empathetic medical assistant.";

#[derive(OpenApi)]
#[openapi(
    paths(chat),
    components(schemas(ChatRequest, ChatResponse, ErrorResponse, ChatMessage, Role))
)]
pub struct ChatApi;

/// Register chat routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/chat", post(chat))
}

/// Relay one chat turn (`POST /api/chat`).
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Reply generated", body = ChatResponse),
        (status = 400, description = "Malformed JSON, or history contains a system message", body = ErrorResponse),
        (status = 415, description = "Missing `Content-Type: application/json`", body = ErrorResponse),
        (status = 422, description = "Missing `message` or unknown role", body = ErrorResponse),
        (status = 500, description = "Provider not configured or unreachable", body = ErrorResponse),
    )
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, ServerError> {
    let provider = state.provider.as_ref().ok_or(ServerError::NotConfigured)?;

    let messages = build_messages(req)?;
    debug!(messages = messages.len(), "relaying chat turn");

    let response = provider.complete(&messages).await?;
    info!(output_len = response.len(), "chat turn done");

    Ok(Json(ChatResponse { response, timestamp: timestamp_now() }))
}

/// Assemble `[system, ...history, user]`.
///
/// History may only carry `user` and `assistant` turns; a `system` entry
/// would let the caller replace the persona.
fn build_messages(req: ChatRequest) -> Result<Vec<ChatMessage>, ServerError> {
    if req.history.iter().any(|m| m.role == Role::System) {
        return Err(ServerError::BadRequest("history may not contain system messages".into()));
    }

    let mut messages = Vec::with_capacity(req.history.len() + 2);
    messages.push(ChatMessage::system(SYSTEM_PROMPT));
    messages.extend(req.history);
    messages.push(ChatMessage::user(req.message));
    Ok(messages)
}

fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
