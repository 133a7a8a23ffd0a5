// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deferred enrichment pipeline for release notifications.
//!
//! [`Pipeline`] sequences schedule-on-ingest and, on fire,
//! reconstruct -> summarize -> publish -> retire, converting every failure
//! into a terminal [`reldigest_core::PipelineStatus`]. The text
//! reconstruction logic lives in [`reconstruct`].

pub mod pipeline;
pub mod reconstruct;

pub use pipeline::Pipeline;
