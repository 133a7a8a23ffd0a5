// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock summarizer for deterministic testing.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use reldigest_core::{DigestError, Summarizer};

/// A mock summarizer that returns pre-configured summaries.
///
/// Summaries are popped from a FIFO queue; when the queue is empty, a
/// default "mock summary" text is returned. Inputs are recorded so tests
/// can assert what text actually reached the summarization stage.
pub struct MockSummarizer {
    responses: Arc<Mutex<VecDeque<String>>>,
    inputs: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<(Option<u16>, String)>>>,
    internal_failure: Arc<Mutex<Option<String>>>,
}

impl MockSummarizer {
    /// Create a mock summarizer with an empty response queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            inputs: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            internal_failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a mock summarizer pre-loaded with the given summaries.
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            inputs: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            internal_failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a summary to the end of the queue.
    pub async fn add_response(&self, text: String) {
        self.responses.lock().await.push_back(text);
    }

    /// Make subsequent calls fail with a summarization error carrying the
    /// given upstream status.
    pub async fn fail_with_status(&self, status: u16, body: &str) {
        *self.failure.lock().await = Some((Some(status), body.to_string()));
    }

    /// Make subsequent calls fail with an error the orchestrator does not
    /// anticipate, exercising its outermost catch.
    pub async fn fail_internal(&self, message: &str) {
        *self.internal_failure.lock().await = Some(message.to_string());
    }

    /// All texts passed to `summarize`.
    pub async fn inputs(&self) -> Vec<String> {
        self.inputs.lock().await.clone()
    }

    /// Count of `summarize` calls.
    pub async fn call_count(&self) -> usize {
        self.inputs.lock().await.len()
    }
}

impl Default for MockSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, DigestError> {
        self.inputs.lock().await.push(text.to_string());
        if let Some(message) = self.internal_failure.lock().await.clone() {
            return Err(DigestError::Internal(message));
        }
        if let Some((status, body)) = self.failure.lock().await.clone() {
            return Err(DigestError::Summarization { status, body });
        }
        Ok(self
            .responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| "mock summary".to_string()))
    }
}
