//! Completion endpoint client
//!
//! One non-streaming POST per chat submit. No retry, no de-duplication, no
//! rate limiting; the session layer decides what to do with failures.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;
use url::Url;

use super::error::AiError;
use super::types::{ChatMessage, CompletionRequest, CompletionResponse};
use crate::config::ChatConfig;

/// HTTP client for the hosted completion endpoint
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl CompletionClient {
    /// Build a client from configuration.
    ///
    /// Fails fast on a missing or unparseable endpoint URL so the problem
    /// surfaces at startup rather than on the first submit.
    pub fn from_config(config: &ChatConfig) -> Result<Self> {
        let raw = config
            .endpoint
            .as_deref()
            .context("no completion endpoint configured")?;
        let endpoint = Url::parse(raw).with_context(|| format!("invalid endpoint URL: {raw}"))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    fn build_request(&self) -> reqwest::RequestBuilder {
        let mut request = self.http.post(self.endpoint.clone());
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        request
    }

    /// Send the full message list and return the assistant's reply text.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, AiError> {
        debug!(count = messages.len(), "sending completion request");

        let response = self
            .build_request()
            .json(&CompletionRequest { messages })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api { status, body });
        }

        let body = response.text().await?;
        CompletionResponse::parse(&body)
    }
}
