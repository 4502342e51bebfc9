use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::assistant::dtos::{ChatRequestDto, ChatResponseDto};
use crate::features::assistant::services::{assistant_service::FALLBACK_REPLY, AssistantService};
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::ApiResponse;

/// Send a chat turn and receive the assistant's reply
///
/// On upstream failure the error is logged and a canned fallback reply is
/// returned instead, so the conversation can continue.
#[utoipa::path(
    post,
    path = "/api/assistant/chat",
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Assistant reply", body = ApiResponse<ChatResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "assistant"
)]
pub async fn chat(
    user: AuthenticatedUser,
    State(service): State<Arc<AssistantService>>,
    AppJson(dto): AppJson<ChatRequestDto>,
) -> Result<Json<ApiResponse<ChatResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = match service.reply(&dto.messages).await {
        Ok(reply) => ChatResponseDto {
            reply,
            fallback: false,
        },
        Err(e) => {
            tracing::error!("Assistant call failed for {}: {}", user.sub, e);
            ChatResponseDto {
                reply: FALLBACK_REPLY.to_string(),
                fallback: true,
            }
        }
    };

    Ok(Json(ApiResponse::success(Some(response), None, None)))
}
