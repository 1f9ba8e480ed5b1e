//! Chat prompt and reply values relayed to the chatbot collaborator.

use thiserror::Error;

/// Validation failure for chat prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatValidationError {
    /// Prompt was empty or whitespace only.
    #[error("prompt must not be empty")]
    EmptyPrompt,
}

/// Prompt text sent to the chatbot.
///
/// ## Invariants
/// - Non-blank; surrounding whitespace is preserved.
///
/// # Examples
/// ```
/// use kyc_portal::domain::ChatPrompt;
///
/// assert!(ChatPrompt::new("  ").is_err());
/// assert_eq!(ChatPrompt::new("What documents do I need?").expect("prompt").as_str(),
///     "What documents do I need?");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt(String);

impl ChatPrompt {
    /// Validate and wrap prompt text.
    pub fn new(prompt: impl Into<String>) -> Result<Self, ChatValidationError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(ChatValidationError::EmptyPrompt);
        }
        Ok(Self(prompt))
    }

    /// Prompt text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Reply produced by the chatbot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply(String);

impl ChatReply {
    /// Wrap reply text.
    pub fn new(reply: impl Into<String>) -> Self {
        Self(reply.into())
    }

    /// Reply text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<ChatReply> for String {
    fn from(value: ChatReply) -> Self {
        value.0
    }
}
