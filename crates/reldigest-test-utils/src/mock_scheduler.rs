// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock scheduler adapter for deterministic testing.
//!
//! Records every `create` and `retire` call and can be configured to fail
//! either operation, enabling assertions on the orchestrator's
//! exactly-one-retirement contract.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use reldigest_core::{DigestError, JobHandle, JobSelector, ScheduledJob, SchedulerAdapter};

/// A mock scheduler that captures calls instead of talking to a host API.
///
/// `retire` is idempotent like the real adapter: it always succeeds unless
/// failure injection is enabled, regardless of whether the selector was
/// ever created or already retired.
pub struct MockScheduler {
    created: Arc<Mutex<Vec<ScheduledJob>>>,
    retired: Arc<Mutex<Vec<JobSelector>>>,
    fail_create: AtomicBool,
    fail_retire: AtomicBool,
}

impl MockScheduler {
    /// Create a mock scheduler where every operation succeeds.
    pub fn new() -> Self {
        Self {
            created: Arc::new(Mutex::new(Vec::new())),
            retired: Arc::new(Mutex::new(Vec::new())),
            fail_create: AtomicBool::new(false),
            fail_retire: AtomicBool::new(false),
        }
    }

    /// Make subsequent `create` calls fail with a scheduling error.
    pub fn fail_create(&self) {
        self.fail_create.store(true, Ordering::SeqCst);
    }

    /// Make subsequent `retire` calls fail with a scheduling error.
    pub fn fail_retire(&self) {
        self.fail_retire.store(true, Ordering::SeqCst);
    }

    /// All jobs passed to `create`.
    pub async fn created_jobs(&self) -> Vec<ScheduledJob> {
        self.created.lock().await.clone()
    }

    /// All selectors passed to `retire`.
    pub async fn retired_selectors(&self) -> Vec<JobSelector> {
        self.retired.lock().await.clone()
    }

    /// Count of `retire` calls.
    pub async fn retire_count(&self) -> usize {
        self.retired.lock().await.len()
    }
}

impl Default for MockScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchedulerAdapter for MockScheduler {
    async fn create(&self, job: &ScheduledJob) -> Result<JobHandle, DigestError> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(DigestError::Scheduling {
                message: "mock create failure".into(),
                source: None,
            });
        }
        let mut created = self.created.lock().await;
        created.push(job.clone());
        Ok(JobHandle(format!("mock-trigger-{}", created.len())))
    }

    async fn retire(&self, selector: &JobSelector) -> Result<(), DigestError> {
        self.retired.lock().await.push(selector.clone());
        if self.fail_retire.load(Ordering::SeqCst) {
            return Err(DigestError::Scheduling {
                message: "mock retire failure".into(),
                source: None,
            });
        }
        Ok(())
    }
}
