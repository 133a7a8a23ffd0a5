// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scheduled-trigger adapter for the host runtime's deferred-job primitive.
//!
//! Implements [`reldigest_core::SchedulerAdapter`] over the trigger API:
//! one-shot create at ingest time, idempotent retire (by handle or by
//! deterministic-name sweep) at execution time.

pub mod trigger;
pub mod wire;

pub use trigger::TriggerScheduler;
