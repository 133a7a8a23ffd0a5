// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock reply publisher for deterministic testing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use reldigest_core::{DigestError, ReplyPublisher};

/// A reply captured by [`MockPublisher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedReply {
    pub channel_id: String,
    pub thread_ts: String,
    pub text: String,
}

/// A mock publisher that captures posted replies for assertion.
pub struct MockPublisher {
    posted: Arc<Mutex<Vec<CapturedReply>>>,
    fail: AtomicBool,
}

impl MockPublisher {
    /// Create a mock publisher where every post succeeds.
    pub fn new() -> Self {
        Self {
            posted: Arc::new(Mutex::new(Vec::new())),
            fail: AtomicBool::new(false),
        }
    }

    /// Make subsequent `publish` calls fail with a delivery error.
    pub fn fail(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    /// All replies passed to `publish`, including ones that failed.
    pub async fn posted(&self) -> Vec<CapturedReply> {
        self.posted.lock().await.clone()
    }

    /// Count of `publish` calls.
    pub async fn post_count(&self) -> usize {
        self.posted.lock().await.len()
    }
}

impl Default for MockPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReplyPublisher for MockPublisher {
    async fn publish(
        &self,
        channel_id: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<(), DigestError> {
        self.posted.lock().await.push(CapturedReply {
            channel_id: channel_id.to_string(),
            thread_ts: thread_ts.to_string(),
            text: text.to_string(),
        });
        if self.fail.load(Ordering::SeqCst) {
            return Err(DigestError::Delivery {
                message: "mock delivery failure".into(),
                source: None,
            });
        }
        Ok(())
    }
}
