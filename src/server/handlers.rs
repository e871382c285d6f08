use super::types::{ChatParams, ErrorResponse, GenerationResponse};
use crate::llm::ChatClient;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};

/// Prompt used when the caller omits the `message` query parameter.
pub const DEFAULT_MESSAGE: &str = "TOP 5 AI initiative in india";

#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<dyn ChatClient>,
}

#[utoipa::path(
    get,
    path = "/chat",
    params(ChatParams),
    responses(
        (status = 200, description = "Generated text for the supplied message", body = GenerationResponse),
        (status = 500, description = "Chat completion failed", body = ErrorResponse)
    )
)]
pub async fn generate(
    State(state): State<AppState>,
    Query(params): Query<ChatParams>,
) -> Result<Json<GenerationResponse>, (StatusCode, Json<ErrorResponse>)> {
    let message = params
        .message
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

    info!("Received chat request ({} bytes)", message.len());

    match state.chat.complete(&message).await {
        Ok(generation) => Ok(Json(GenerationResponse { generation })),
        Err(e) => {
            error!("Chat completion failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Completion error: {}", e),
                }),
            ))
        }
    }
}
