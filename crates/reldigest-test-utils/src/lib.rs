// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for reldigest integration tests.
//!
//! Provides mock implementations of the four adapter traits with call
//! recording, so orchestrator tests can assert exact call counts and
//! arguments without external services.

pub mod mock_publisher;
pub mod mock_scheduler;
pub mod mock_source;
pub mod mock_summarizer;

pub use mock_publisher::MockPublisher;
pub use mock_scheduler::MockScheduler;
pub use mock_source::MockSource;
pub use mock_summarizer::MockSummarizer;
