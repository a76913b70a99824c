//! Completion endpoint integration
//!
//! Wire types, the HTTP client, and the persona preamble sent with every
//! request.

mod client;
mod error;
pub mod persona;
pub mod types;

pub use client::CompletionClient;
pub use error::AiError;
