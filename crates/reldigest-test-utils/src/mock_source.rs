// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock message source for deterministic testing.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use reldigest_core::{DigestError, MessageSource, SourceMessage};

/// A mock message source serving a single configurable record.
///
/// Counts lookups so tests can assert the reconstructor is invoked exactly
/// when the payload text is empty, and never otherwise.
pub struct MockSource {
    record: Arc<Mutex<Option<SourceMessage>>>,
    fetches: AtomicUsize,
    fail: AtomicBool,
}

impl MockSource {
    /// Create a mock source with no record (lookups return `None`).
    pub fn new() -> Self {
        Self {
            record: Arc::new(Mutex::new(None)),
            fetches: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        }
    }

    /// Create a mock source serving `record` for every lookup.
    pub fn with_record(record: SourceMessage) -> Self {
        Self {
            record: Arc::new(Mutex::new(Some(record))),
            fetches: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        }
    }

    /// Make subsequent lookups fail with a channel error.
    pub fn fail(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    /// Count of `fetch_at` calls.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageSource for MockSource {
    async fn fetch_at(
        &self,
        _channel_id: &str,
        _ts: &str,
    ) -> Result<Option<SourceMessage>, DigestError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(DigestError::Channel {
                message: "mock lookup failure".into(),
                source: None,
            });
        }
        Ok(self.record.lock().await.clone())
    }
}
