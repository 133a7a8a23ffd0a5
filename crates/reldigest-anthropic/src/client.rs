// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Anthropic Messages API.
//!
//! Provides [`AnthropicClient`] which handles request construction,
//! authentication, and response classification. The pipeline makes a
//! single attempt per notification: a failed call is surfaced to the
//! orchestrator, never retried here.

use std::time::Duration;

use async_trait::async_trait;
use reldigest_core::{DigestError, Summarizer};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{ApiErrorResponse, ApiMessage, MessageRequest, MessageResponse};

/// Fixed instruction prompt for release-note summarization.
///
/// Output language and format rules are part of the product contract and
/// not user-configurable.
pub const SYSTEM_PROMPT: &str = "以下のGitHubリリース通知を日本語で簡潔に要約してください。

## 要件
- 重要な新機能・変更点を3〜5個の箇条書きで
- 技術的な詳細は省略してOK
- 破壊的変更があれば⚠️をつけて強調";

/// HTTP client for Anthropic API communication.
///
/// Manages authentication headers and connection pooling. Each
/// [`Summarizer::summarize`] call issues exactly one request.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: reqwest::Client,
    model: String,
    max_tokens: u32,
    base_url: String,
}

impl AnthropicClient {
    /// Creates a new Anthropic API client.
    ///
    /// # Arguments
    /// * `api_key` - Anthropic API key for authentication
    /// * `api_version` - API version string (e.g., "2023-06-01")
    /// * `model` - Model identifier used for every summarization request
    /// * `max_tokens` - Output token cap per summary
    pub fn new(
        api_key: &str,
        api_version: &str,
        model: String,
        max_tokens: u32,
    ) -> Result<Self, DigestError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key).map_err(|e| {
                DigestError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_str(api_version).map_err(|e| {
                DigestError::Config(format!("invalid API version header value: {e}"))
            })?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| DigestError::Summarization {
                status: None,
                body: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            model,
            max_tokens,
            base_url: "https://api.anthropic.com".to_string(),
        })
    }

    /// Builds a client from the loaded configuration section.
    pub fn from_config(
        cfg: &reldigest_config::model::AnthropicConfig,
    ) -> Result<Self, DigestError> {
        let api_key = cfg.api_key.as_deref().ok_or_else(|| {
            DigestError::Config("anthropic.api_key is not configured".to_string())
        })?;
        Ok(Self::new(api_key, &cfg.api_version, cfg.model.clone(), cfg.max_tokens)?
            .with_base_url(cfg.base_url.clone()))
    }

    /// Overrides the base URL (config override and wiremock tests).
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }
}

#[async_trait]
impl Summarizer for AnthropicClient {
    /// Sends one summarization request and returns the summary text.
    ///
    /// Non-2xx responses and 2xx responses without a text segment both
    /// classify as [`DigestError::Summarization`].
    async fn summarize(&self, text: &str) -> Result<String, DigestError> {
        let request = MessageRequest {
            model: self.model.clone(),
            messages: vec![ApiMessage {
                role: "user".into(),
                content: text.to_string(),
            }],
            system: Some(SYSTEM_PROMPT.to_string()),
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| DigestError::Summarization {
                status: None,
                body: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        debug!(status = %status, "summarization response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                format!("{}: {}", api_err.error.type_, api_err.error.message)
            } else {
                body
            };
            return Err(DigestError::Summarization {
                status: Some(status.as_u16()),
                body: detail,
            });
        }

        let body = response.text().await.map_err(|e| DigestError::Summarization {
            status: None,
            body: format!("failed to read response body: {e}"),
        })?;
        let parsed: MessageResponse =
            serde_json::from_str(&body).map_err(|e| DigestError::Summarization {
                status: None,
                body: format!("failed to parse API response: {e}"),
            })?;

        // A well-formed response carries exactly one text segment; its
        // absence is a malformed-response condition, not a crash.
        parsed
            .content
            .iter()
            .find(|block| block.block_type == "text" && !block.text.is_empty())
            .map(|block| block.text.clone())
            .ok_or_else(|| DigestError::Summarization {
                status: None,
                body: "no text segment in response content".to_string(),
            })
    }
}
