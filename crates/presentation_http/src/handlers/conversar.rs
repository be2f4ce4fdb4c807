//! Conversation exchange endpoint

use axum::{Json, extract::State};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;
use tracing::instrument;

use domain::SessionId;

use crate::{error::ApiError, state::AppState};

/// Token counts included in every reply
#[derive(Debug, Serialize)]
pub struct TokenBreakdown {
    /// Words in the corrected user text
    pub usuario: usize,
    /// Words in the assistant reply
    pub llm: usize,
    /// Sum of both
    pub total: usize,
}

/// Successful exchange response
#[derive(Debug, Serialize)]
pub struct ConversarResponse {
    /// User text after phonetic correction
    pub transcripcion_usuario: String,
    /// Assistant reply text
    pub respuesta_asistente: String,
    /// Synthesized reply, base64-encoded audio
    pub audio_base64: String,
    /// Word counts for the exchange
    pub tokens: TokenBreakdown,
}

/// Handle one conversation exchange.
///
/// The body is taken as loose JSON so a missing or wrongly-typed `texto`
/// answers 400 with the fixed message instead of a framework 422.
#[instrument(skip(state, body))]
pub async fn conversar(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ConversarResponse>, ApiError> {
    if !state.is_enabled() {
        return Err(ApiError::ServiceDisabled);
    }

    let texto = body
        .get("texto")
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::InvalidInput)?;

    let session_id = body
        .get("sesion_id")
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map_or_else(SessionId::default_session, SessionId::new);

    let reply = tokio::time::timeout(
        state.request_timeout,
        state.conversation_service.handle(&session_id, texto),
    )
    .await
    .map_err(|_| ApiError::Internal("exchange timed out".to_string()))??;

    Ok(Json(ConversarResponse {
        audio_base64: BASE64.encode(&reply.audio),
        transcripcion_usuario: reply.user_text,
        respuesta_asistente: reply.reply_text,
        tokens: TokenBreakdown {
            usuario: reply.tokens.user,
            llm: reply.tokens.llm,
            total: reply.tokens.total,
        },
    }))
}
