// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scheduler adapter trait for the host's one-shot delayed-trigger primitive.

use async_trait::async_trait;

use crate::error::DigestError;
use crate::types::{JobHandle, JobSelector, ScheduledJob};

/// Adapter over the host runtime's scheduling primitive.
///
/// The scheduler offers no transactional guarantees: `create` does not
/// prevent a second live job with the same name, and the same job may be
/// retired redundantly by two different code paths. Implementations must
/// therefore make `retire` idempotent -- retiring an already-retired or
/// nonexistent job is a successful no-op, never a hard error.
#[async_trait]
pub trait SchedulerAdapter: Send + Sync {
    /// Creates a one-shot deferred job carrying the notification payload.
    async fn create(&self, job: &ScheduledJob) -> Result<JobHandle, DigestError>;

    /// Retires a job by handle, or by deterministic-name lookup when the
    /// handle never reached the executing side.
    async fn retire(&self, selector: &JobSelector) -> Result<(), DigestError>;
}
