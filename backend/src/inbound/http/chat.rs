//! Chat relay handler.
//!
//! ```text
//! POST /api/v1/chat {"prompt":"What documents do I need?"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::ports::ChatServiceError;
use crate::domain::{ChatPrompt, ChatValidationError, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Chat request body for `POST /api/v1/chat`.
#[derive(Deserialize, Serialize, ToSchema)]
pub struct ChatRequest {
    /// Question for the chatbot; must not be blank.
    #[schema(example = "What documents do I need?")]
    pub prompt: String,
}

/// Chatbot answer for one prompt.
#[derive(Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct ChatResponse {
    /// Chatbot answer text.
    pub reply: String,
}

/// Relay one prompt to the configured chatbot.
#[utoipa::path(
    post,
    path = "/api/v1/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Chatbot reply", body = ChatResponse),
        (status = 400, description = "Blank prompt", body = Error),
        (status = 503, description = "Chatbot unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["chat"],
    operation_id = "sendChatMessage",
    security([])
)]
#[post("/chat")]
pub async fn send_chat_message(
    state: web::Data<HttpState>,
    payload: web::Json<ChatRequest>,
) -> ApiResult<web::Json<ChatResponse>> {
    let prompt = ChatPrompt::new(payload.into_inner().prompt).map_err(map_prompt_error)?;
    let reply = state
        .chat
        .send_message(&prompt)
        .await
        .map_err(map_chat_error)?;
    Ok(web::Json(ChatResponse {
        reply: reply.into(),
    }))
}

fn map_prompt_error(err: ChatValidationError) -> Error {
    match err {
        ChatValidationError::EmptyPrompt => Error::invalid_request("prompt must not be empty")
            .with_details(json!({ "field": "prompt", "code": "empty_prompt" })),
    }
}

fn map_chat_error(err: ChatServiceError) -> Error {
    warn!(error = %err, "chat relay failed");
    match err {
        ChatServiceError::Decode { .. } => Error::internal(err.to_string()),
        ChatServiceError::Status { status, .. } => {
            Error::service_unavailable("chat service is unavailable")
                .with_details(json!({ "retryable": status >= 500, "reason": err.to_string() }))
        }
        _ => Error::service_unavailable("chat service is unavailable").with_details(json!({
            "retryable": err.is_retryable(),
            "reason": err.to_string(),
        })),
    }
}
