//! Chat error taxonomy

use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a single completion request
#[derive(Debug, Error)]
pub enum AiError {
    /// Network-level failure: connect, timeout, or body read
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("completion endpoint returned {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// Response body did not expose `choices[0].message.content`
    #[error("assistant response malformed: {0}")]
    MalformedResponse(String),
}
