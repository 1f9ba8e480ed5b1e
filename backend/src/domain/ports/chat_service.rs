//! Driven port for the chatbot collaborator.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{ChatPrompt, ChatReply};

define_port_error! {
    /// Errors surfaced while relaying a chat prompt.
    pub enum ChatServiceError {
        /// No chat endpoint was configured at startup.
        NotConfigured => "chat endpoint is not configured",
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "chat transport failed: {message}"; retryable,
        /// The call exceeded its timeout.
        Timeout { message: String } =>
            "chat request timed out: {message}"; retryable,
        /// The chatbot answered with a non-success status.
        Status { status: u16, message: String } =>
            "chat endpoint returned status {status}: {message}",
        /// The response body did not carry a reply.
        Decode { message: String } =>
            "chat reply decode failed: {message}",
    }
}

/// Port for sending one prompt and receiving one reply.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Relay `prompt` and return the chatbot's reply.
    async fn send_message(&self, prompt: &ChatPrompt) -> Result<ChatReply, ChatServiceError>;
}

/// Chat service used when no endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredChatService;

#[async_trait]
impl ChatService for UnconfiguredChatService {
    async fn send_message(&self, _prompt: &ChatPrompt) -> Result<ChatReply, ChatServiceError> {
        Err(ChatServiceError::not_configured())
    }
}

/// Fixture echoing the prompt back.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureChatService;

#[cfg(test)]
#[async_trait]
impl ChatService for FixtureChatService {
    async fn send_message(&self, prompt: &ChatPrompt) -> Result<ChatReply, ChatServiceError> {
        Ok(ChatReply::new(format!("echo: {}", prompt.as_str())))
    }
}
