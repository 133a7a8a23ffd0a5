// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the pipeline's external collaborators.
//!
//! All traits use `#[async_trait]` for dynamic dispatch compatibility;
//! the orchestrator holds each collaborator as `Arc<dyn Trait>`.

pub mod publisher;
pub mod scheduler;
pub mod source;
pub mod summarizer;

pub use publisher::ReplyPublisher;
pub use scheduler::SchedulerAdapter;
pub use source::MessageSource;
pub use summarizer::Summarizer;
