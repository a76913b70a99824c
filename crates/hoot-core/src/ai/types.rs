//! Wire types for the completion endpoint
//!
//! The endpoint accepts `{ "messages": [{"role", "content"}, ...] }` and
//! answers with an OpenAI-style body exposing `choices[0].message.content`.
//! Timestamps are local presentation data and never cross the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::AiError;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// One transcript entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// When the message was appended locally; not part of the wire format
    #[serde(skip)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::stamped(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::stamped(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::stamped(Role::System, content)
    }

    fn stamped(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Some(Utc::now()),
        }
    }
}

/// Request body for one completion call
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub messages: &'a [ChatMessage],
}

/// Response body of a completion call
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: AssistantReply,
}

#[derive(Debug, Deserialize)]
pub struct AssistantReply {
    pub content: String,
}

impl CompletionResponse {
    /// Extract the assistant text from a raw response body.
    ///
    /// Any shape mismatch, including an empty `choices` array, is reported
    /// as `AiError::MalformedResponse` so the caller can surface it instead
    /// of crashing on a missing field.
    pub fn parse(body: &str) -> Result<String, AiError> {
        let response: CompletionResponse =
            serde_json::from_str(body).map_err(|e| AiError::MalformedResponse(e.to_string()))?;
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AiError::MalformedResponse("response contained no choices".into()))?;
        Ok(choice.message.content)
    }
}
