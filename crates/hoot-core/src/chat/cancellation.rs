//! Cancellation support for completion requests
//!
//! A completion call that outlives the chat widget must never apply its
//! response. The UI cancels the root token on teardown; every spawned
//! request selects on a child token.

use tokio_util::sync::CancellationToken;

/// Wrapper around CancellationToken for completion request cancellation
#[derive(Clone)]
pub struct ChatCancellation {
    token: CancellationToken,
}

impl ChatCancellation {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Cancel every outstanding request using this token
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Get a child token for one request
    pub fn child_token(&self) -> CancellationToken {
        self.token.child_token()
    }
}

impl Default for ChatCancellation {
    fn default() -> Self {
        Self::new()
    }
}
