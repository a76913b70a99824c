//! Chat session
//!
//! Append-only transcript plus the submit/complete lifecycle. The session
//! owns no I/O: `submit` hands back the outbound payload, the caller runs
//! the request however it likes and feeds the result to `apply_completion`.
//!
//! Every submit bumps a generation counter. A completion result carrying an
//! older generation is dropped without touching state, which closes the
//! stale-response window when a request outlives the widget.

use tracing::{debug, warn};

use crate::ai::persona;
use crate::ai::types::{ChatMessage, Role};
use crate::ai::AiError;

/// Payload for one completion call
#[derive(Debug)]
pub struct OutboundRequest {
    /// Generation of the submit that produced this request
    pub generation: u64,
    /// Persona preamble + prior user/assistant turns + the new user message
    pub messages: Vec<ChatMessage>,
}

/// State of the chat widget
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    loading: bool,
    generation: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The transcript, local system notices included
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether a completion request is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Submit user input.
    ///
    /// Appends exactly one user message and returns the outbound payload.
    /// Whitespace-only input is a no-op, as is submitting while a request
    /// is already in flight (the input line is disabled then, this is the
    /// backstop).
    pub fn submit(&mut self, input: &str) -> Option<OutboundRequest> {
        let trimmed = input.trim();
        if trimmed.is_empty() || self.loading {
            return None;
        }

        self.generation += 1;
        let user = ChatMessage::user(trimmed);

        // Local system notices are presentation only and never replayed to
        // the endpoint.
        let mut messages = Vec::with_capacity(self.messages.len() + 2);
        messages.push(ChatMessage::system(persona::PREAMBLE));
        messages.extend(
            self.messages
                .iter()
                .filter(|m| m.role != Role::System)
                .cloned(),
        );
        messages.push(user.clone());

        self.messages.push(user);
        self.loading = true;

        Some(OutboundRequest {
            generation: self.generation,
            messages,
        })
    }

    /// Apply the result of a completion request.
    ///
    /// Success appends the assistant message. A malformed response appends
    /// a system notice to the transcript. Transport and API failures are
    /// logged and swallowed. All three clear the loading flag; a result
    /// from an older generation does nothing at all.
    pub fn apply_completion(&mut self, generation: u64, result: Result<String, AiError>) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale completion result");
            return;
        }

        self.loading = false;
        match result {
            Ok(content) => self.messages.push(ChatMessage::assistant(content)),
            Err(AiError::MalformedResponse(detail)) => {
                warn!(detail = %detail, "completion response malformed");
                self.messages
                    .push(ChatMessage::system(format!("assistant response malformed: {detail}")));
            }
            Err(err) => {
                warn!(error = %err, "completion request failed");
            }
        }
    }
}
