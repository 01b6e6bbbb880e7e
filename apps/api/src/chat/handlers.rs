//! Axum route handler for the Chat API.

use axum::{extract::State, Json};
use tracing::{debug, info};

use crate::chat::assembly::assemble_messages;
use crate::chat::models::{ChatRequest, ChatResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/chat
///
/// Replays the caller's history behind the persona prompt and returns the
/// model's reply. No server-side session is kept.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let llm = state
        .llm
        .as_ref()
        .ok_or_else(|| AppError::NotConfigured("OpenAI API Key not configured".to_string()))?;

    let messages = assemble_messages(
        state.persona.system_prompt(),
        &request.history,
        &request.message,
    );

    // system + new message are always present
    let replayed = messages.len() - 2;
    let dropped = request.history.len() - replayed;
    if dropped > 0 {
        debug!("Dropped {dropped} history entries with unsupported roles");
    }
    info!("Chat request: {} history turns replayed", replayed);

    let response = llm
        .complete(&messages)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    Ok(Json(ChatResponse { response }))
}
