//! Chat widget state
//!
//! Transcript, submit lifecycle, and cancellation of in-flight requests.

mod cancellation;
mod session;

pub use cancellation::ChatCancellation;
pub use session::{ChatSession, OutboundRequest};
