// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! State-machine tests for the pipeline orchestrator, driven by the mock
//! adapters from reldigest-test-utils.

use std::sync::Arc;

use reldigest_core::{
    job_name, Attachment, JobHandle, JobSelector, NotificationPayload, PipelineStatus,
    SourceMessage,
};
use reldigest_pipeline::Pipeline;
use reldigest_test_utils::{MockPublisher, MockScheduler, MockSource, MockSummarizer};

struct Harness {
    scheduler: Arc<MockScheduler>,
    source: Arc<MockSource>,
    summarizer: Arc<MockSummarizer>,
    publisher: Arc<MockPublisher>,
    pipeline: Pipeline,
}

fn harness_with_source(source: MockSource) -> Harness {
    let scheduler = Arc::new(MockScheduler::new());
    let source = Arc::new(source);
    let summarizer = Arc::new(MockSummarizer::new());
    let publisher = Arc::new(MockPublisher::new());
    let pipeline = Pipeline::new(
        scheduler.clone(),
        source.clone(),
        summarizer.clone(),
        publisher.clone(),
        60,
    );
    Harness {
        scheduler,
        source,
        summarizer,
        publisher,
        pipeline,
    }
}

fn harness() -> Harness {
    harness_with_source(MockSource::new())
}

fn payload(text: &str) -> NotificationPayload {
    NotificationPayload {
        channel_id: "C0ABJFC3T1S".into(),
        message_ts: "1700000000.000100".into(),
        message_text: text.into(),
    }
}

#[tokio::test]
async fn ingest_schedules_deferred_job() {
    let h = harness();

    let status = h.pipeline.ingest(payload("v2.0 released")).await;
    assert_eq!(status, PipelineStatus::Scheduled);

    let jobs = h.scheduler.created_jobs().await;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].name, job_name("1700000000.000100"));
    assert_eq!(jobs[0].payload, payload("v2.0 released"));

    // Ingest does no synchronous processing.
    assert_eq!(h.source.fetch_count(), 0);
    assert_eq!(h.summarizer.call_count().await, 0);
    assert_eq!(h.publisher.post_count().await, 0);
}

#[tokio::test]
async fn ingest_with_failing_scheduler_short_circuits() {
    let h = harness();
    h.scheduler.fail_create();

    let status = h.pipeline.ingest(payload("v2.0 released")).await;
    assert_eq!(status, PipelineStatus::TriggerCreationFailed);

    assert_eq!(h.source.fetch_count(), 0);
    assert_eq!(h.summarizer.call_count().await, 0);
    assert_eq!(h.publisher.post_count().await, 0);
}

#[tokio::test]
async fn execute_with_known_text_skips_reconstruction() {
    let h = harness();

    let status = h.pipeline.execute(payload("v2.0 released"), None).await;
    assert_eq!(status, PipelineStatus::Success);

    // The reconstructor must never be consulted when text is present.
    assert_eq!(h.source.fetch_count(), 0);
    assert_eq!(h.summarizer.inputs().await, vec!["v2.0 released"]);

    let posted = h.publisher.posted().await;
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].text, "mock summary");
    assert_eq!(posted[0].thread_ts, "1700000000.000100");
}

#[tokio::test]
async fn ingest_then_execute_recovers_text_from_attachment_fallback() {
    let record = SourceMessage {
        text: String::new(),
        attachments: vec![Attachment {
            text: None,
            fallback: Some("v2.0 released".into()),
        }],
        blocks: vec![],
    };
    let h = harness_with_source(MockSource::with_record(record));
    h.summarizer.add_response("v2.0 の要約です".to_string()).await;

    assert_eq!(
        h.pipeline.ingest(payload("")).await,
        PipelineStatus::Scheduled
    );
    let status = h.pipeline.execute(payload(""), None).await;
    assert_eq!(status, PipelineStatus::Success);

    assert_eq!(h.source.fetch_count(), 1);
    assert_eq!(h.summarizer.inputs().await, vec!["v2.0 released"]);

    let posted = h.publisher.posted().await;
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].text, "v2.0 の要約です");
    assert_eq!(posted[0].channel_id, "C0ABJFC3T1S");
}

#[tokio::test]
async fn execute_with_no_reconstructable_text_posts_notice() {
    // All three representations empty: the lookup returns a bare record.
    let h = harness_with_source(MockSource::with_record(SourceMessage::default()));

    let status = h.pipeline.execute(payload(""), None).await;
    assert_eq!(status, PipelineStatus::EmptyMessage);

    assert_eq!(h.summarizer.call_count().await, 0);
    let posted = h.publisher.posted().await;
    assert_eq!(posted.len(), 1, "exactly one failure notice expected");
    assert!(posted[0].text.contains("⚠️"), "got: {}", posted[0].text);
}

#[tokio::test]
async fn execute_with_failed_lookup_reports_empty_message() {
    let h = harness();
    h.source.fail();

    let status = h.pipeline.execute(payload(""), None).await;
    assert_eq!(status, PipelineStatus::EmptyMessage);
    assert_eq!(h.source.fetch_count(), 1);
    assert_eq!(h.summarizer.call_count().await, 0);
}

#[tokio::test]
async fn execute_with_upstream_500_reports_claude_api_error() {
    let h = harness();
    h.summarizer.fail_with_status(500, "internal error").await;

    let status = h.pipeline.execute(payload("v2.0 released"), None).await;
    assert_eq!(status, PipelineStatus::ClaudeApiError);

    // One attempt, no retry.
    assert_eq!(h.summarizer.call_count().await, 1);

    let posted = h.publisher.posted().await;
    assert_eq!(posted.len(), 1, "exactly one error notice expected");
    assert!(posted[0].text.contains("500"), "notice should carry the upstream status: {}", posted[0].text);
}

#[tokio::test]
async fn execute_with_failing_publisher_reports_slack_api_error() {
    let h = harness();
    h.publisher.fail();

    let status = h.pipeline.execute(payload("v2.0 released"), None).await;
    assert_eq!(status, PipelineStatus::SlackApiError);

    // Only the summary post was attempted; no further notice is possible
    // when the delivery channel itself is the failing resource.
    assert_eq!(h.publisher.post_count().await, 1);
}

#[tokio::test]
async fn execute_with_unexpected_error_reports_error_status() {
    let h = harness();
    h.summarizer.fail_internal("mock wiring broke").await;

    let status = h.pipeline.execute(payload("v2.0 released"), None).await;
    assert_eq!(status, PipelineStatus::Error);

    let posted = h.publisher.posted().await;
    assert_eq!(posted.len(), 1, "generic failure notice expected");
}

#[tokio::test]
async fn execute_retires_exactly_once_on_every_path() {
    // Success path.
    let h = harness();
    h.pipeline.execute(payload("v2.0 released"), None).await;
    assert_eq!(h.scheduler.retire_count().await, 1);

    // Empty-message path.
    let h = harness();
    h.pipeline.execute(payload(""), None).await;
    assert_eq!(h.scheduler.retire_count().await, 1);

    // Summarization-failure path.
    let h = harness();
    h.summarizer.fail_with_status(500, "boom").await;
    h.pipeline.execute(payload("v2.0 released"), None).await;
    assert_eq!(h.scheduler.retire_count().await, 1);

    // Delivery-failure path.
    let h = harness();
    h.publisher.fail();
    h.pipeline.execute(payload("v2.0 released"), None).await;
    assert_eq!(h.scheduler.retire_count().await, 1);

    // Unexpected-error path.
    let h = harness();
    h.summarizer.fail_internal("boom").await;
    h.pipeline.execute(payload("v2.0 released"), None).await;
    assert_eq!(h.scheduler.retire_count().await, 1);
}

#[tokio::test]
async fn execute_retires_by_handle_when_known_else_by_name() {
    let h = harness();
    h.pipeline
        .execute(payload("text"), Some(JobHandle("Ft123".into())))
        .await;
    assert_eq!(
        h.scheduler.retired_selectors().await,
        vec![JobSelector::Handle(JobHandle("Ft123".into()))]
    );

    let h = harness();
    h.pipeline.execute(payload("text"), None).await;
    assert_eq!(
        h.scheduler.retired_selectors().await,
        vec![JobSelector::Name(job_name("1700000000.000100"))]
    );
}

#[tokio::test]
async fn retirement_failure_never_overrides_the_computed_status() {
    let h = harness();
    h.scheduler.fail_retire();

    let status = h.pipeline.execute(payload("v2.0 released"), None).await;
    assert_eq!(status, PipelineStatus::Success);
    assert_eq!(h.scheduler.retire_count().await, 1);
}
