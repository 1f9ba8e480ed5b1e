//! Reqwest-backed chatbot adapter.
//!
//! Sends `POST {endpoint}` with `{"prompt": ...}` and expects
//! `{"reply": ...}`. One request per prompt; no retry at this layer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{ChatService, ChatServiceError};
use crate::domain::{ChatPrompt, ChatReply};
use crate::outbound::http_support::{HttpAdapterBuildError, body_preview, build_client};

#[derive(Debug, Serialize)]
struct ChatRequestDto<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponseDto {
    reply: String,
}

/// Chat service adapter posting prompts to one configured endpoint.
pub struct ChatHttpClient {
    client: Client,
    endpoint: Url,
}

impl ChatHttpClient {
    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, HttpAdapterBuildError> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint,
        })
    }
}

#[async_trait]
impl ChatService for ChatHttpClient {
    async fn send_message(&self, prompt: &ChatPrompt) -> Result<ChatReply, ChatServiceError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&ChatRequestDto {
                prompt: prompt.as_str(),
            })
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(ChatServiceError::status(
                status.as_u16(),
                body_preview(body.as_ref()),
            ));
        }

        parse_reply(body.as_ref())
    }
}

fn parse_reply(body: &[u8]) -> Result<ChatReply, ChatServiceError> {
    let decoded: ChatResponseDto = serde_json::from_slice(body).map_err(|error| {
        ChatServiceError::decode(format!("invalid chat reply JSON: {error}"))
    })?;
    Ok(ChatReply::new(decoded.reply))
}

fn map_transport_error(error: reqwest::Error) -> ChatServiceError {
    if error.is_timeout() {
        ChatServiceError::timeout(error.to_string())
    } else {
        ChatServiceError::transport(error.to_string())
    }
}
