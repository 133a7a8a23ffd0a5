// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the reldigest pipeline.
//!
//! Provides the error type, the domain types that cross the deferred
//! execution boundary, and the adapter traits implemented by the
//! scheduler, summarization, and chat platform crates.

pub mod error;
pub mod traits;
pub mod types;

pub use error::DigestError;
pub use types::{
    job_name, Attachment, JobHandle, JobSelector, LayoutBlock, NotificationPayload,
    PipelineStatus, ScheduledJob, SourceMessage,
};

pub use traits::{MessageSource, ReplyPublisher, SchedulerAdapter, Summarizer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_error_has_all_variants() {
        let _config = DigestError::Config("test".into());
        let _scheduling = DigestError::Scheduling {
            message: "test".into(),
            source: None,
        };
        let _channel = DigestError::Channel {
            message: "test".into(),
            source: None,
        };
        let _summarization = DigestError::Summarization {
            status: Some(500),
            body: "test".into(),
        };
        let _delivery = DigestError::Delivery {
            message: "test".into(),
            source: None,
        };
        let _internal = DigestError::Internal("test".into());
    }

    #[test]
    fn summarization_error_includes_status_when_known() {
        let with_status = DigestError::Summarization {
            status: Some(529),
            body: "overloaded".into(),
        };
        assert_eq!(
            with_status.to_string(),
            "summarization error (status 529): overloaded"
        );

        let without_status = DigestError::Summarization {
            status: None,
            body: "no text segment in response".into(),
        };
        assert_eq!(
            without_status.to_string(),
            "summarization error: no text segment in response"
        );
    }

    #[test]
    fn all_adapter_traits_are_exported() {
        // Compile-time check that the adapter traits are object safe --
        // the orchestrator holds each one behind Arc<dyn Trait>.
        fn _assert_scheduler(_: &dyn SchedulerAdapter) {}
        fn _assert_summarizer(_: &dyn Summarizer) {}
        fn _assert_publisher(_: &dyn ReplyPublisher) {}
        fn _assert_source(_: &dyn MessageSource) {}
    }
}
