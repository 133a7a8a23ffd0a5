// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The deferred enrichment pipeline orchestrator.
//!
//! One logical pipeline, two entry points driven by the host runtime:
//! [`Pipeline::ingest`] runs synchronously when the notification arrives
//! and only schedules the deferred job; [`Pipeline::execute`] runs when
//! the job fires and performs reconstruct -> summarize -> publish ->
//! retire. Every invocation produces exactly one [`PipelineStatus`] and
//! no error crosses the pipeline boundary.

use std::sync::Arc;

use chrono::Utc;
use reldigest_core::{
    job_name, DigestError, JobHandle, JobSelector, MessageSource, NotificationPayload,
    PipelineStatus, ReplyPublisher, ScheduledJob, SchedulerAdapter, Summarizer,
};
use tracing::{debug, error, info, warn};

use crate::reconstruct::reconstruct;

/// Notice posted when no text could be reconstructed.
const NOTICE_EMPTY: &str = "⚠️ リリース通知の本文を取得できなかったため、要約をスキップしました。";

/// Notice prefix posted when the summarization service fails.
const NOTICE_SUMMARIZE_FAILED: &str = "⚠️ 要約の生成に失敗しました";

/// Notice posted when the pipeline hits an error it did not anticipate.
const NOTICE_UNEXPECTED: &str = "⚠️ 要約処理で予期しないエラーが発生しました。";

/// Orchestrates the deferred enrichment pipeline over its four adapters.
pub struct Pipeline {
    scheduler: Arc<dyn SchedulerAdapter>,
    source: Arc<dyn MessageSource>,
    summarizer: Arc<dyn Summarizer>,
    publisher: Arc<dyn ReplyPublisher>,
    delay_secs: u64,
}

impl Pipeline {
    /// Builds a pipeline that defers execution by `delay_secs` seconds.
    pub fn new(
        scheduler: Arc<dyn SchedulerAdapter>,
        source: Arc<dyn MessageSource>,
        summarizer: Arc<dyn Summarizer>,
        publisher: Arc<dyn ReplyPublisher>,
        delay_secs: u64,
    ) -> Self {
        Self {
            scheduler,
            source,
            summarizer,
            publisher,
            delay_secs,
        }
    }

    /// Ingest phase: schedule the one-shot deferred job and return.
    ///
    /// No synchronous processing happens here; the pipeline continues only
    /// if and when the host fires the job.
    pub async fn ingest(&self, payload: NotificationPayload) -> PipelineStatus {
        let fires_at = Utc::now() + chrono::Duration::seconds(self.delay_secs as i64);
        let job = ScheduledJob::new(payload, fires_at);

        match self.scheduler.create(&job).await {
            Ok(handle) => {
                info!(name = %job.name, handle = %handle.0, fires_at = %job.fires_at, "deferred job scheduled");
                PipelineStatus::Scheduled
            }
            Err(DigestError::Scheduling { message, .. }) => {
                warn!(name = %job.name, %message, "trigger creation rejected");
                PipelineStatus::TriggerCreationFailed
            }
            Err(err) => {
                error!(name = %job.name, error = %err, "unexpected error during scheduling");
                PipelineStatus::Error
            }
        }
    }

    /// Execution phase: reconstruct, summarize, publish, retire.
    ///
    /// The retirement step is a scoped cleanup: it runs after every stage
    /// outcome, including the unexpected-error path, and its own failure is
    /// logged without overriding the status the stages produced.
    pub async fn execute(
        &self,
        payload: NotificationPayload,
        handle: Option<JobHandle>,
    ) -> PipelineStatus {
        let status = match self.run_stages(&payload).await {
            Ok(status) => status,
            Err(err) => {
                error!(ts = %payload.message_ts, error = %err, "unexpected pipeline failure");
                self.notify(&payload, NOTICE_UNEXPECTED).await;
                PipelineStatus::Error
            }
        };

        let selector = match handle {
            Some(h) => JobSelector::Handle(h),
            None => JobSelector::Name(job_name(&payload.message_ts)),
        };
        if let Err(err) = self.scheduler.retire(&selector).await {
            // Never overrides the status the stages produced.
            warn!(ts = %payload.message_ts, error = %err, "job retirement failed");
        }

        status
    }

    /// The linear stage sequence. Anticipated failures come back as an
    /// `Ok(status)`; anything else bubbles to the outermost catch in
    /// [`Pipeline::execute`].
    async fn run_stages(
        &self,
        payload: &NotificationPayload,
    ) -> Result<PipelineStatus, DigestError> {
        // Step 1: resolve the source text. The reconstructor is only
        // consulted when ingestion saw an empty body.
        let text = if payload.message_text.is_empty() {
            reconstruct(self.source.as_ref(), &payload.channel_id, &payload.message_ts).await
        } else {
            payload.message_text.clone()
        };

        if text.is_empty() {
            info!(ts = %payload.message_ts, "no reconstructable text, skipping summarization");
            self.notify(payload, NOTICE_EMPTY).await;
            return Ok(PipelineStatus::EmptyMessage);
        }

        // Step 2: one summarization attempt.
        let summary = match self.summarizer.summarize(&text).await {
            Ok(summary) => summary,
            Err(DigestError::Summarization { status, body }) => {
                warn!(ts = %payload.message_ts, ?status, %body, "summarization failed");
                let notice = match status {
                    Some(code) => format!("{NOTICE_SUMMARIZE_FAILED} (status {code})"),
                    None => NOTICE_SUMMARIZE_FAILED.to_string(),
                };
                self.notify(payload, &notice).await;
                return Ok(PipelineStatus::ClaudeApiError);
            }
            Err(err) => return Err(err),
        };

        // Step 3: deliver the summary into the thread. No user notice on
        // failure -- the delivery channel is the failing resource.
        if let Err(err) = self
            .publisher
            .publish(&payload.channel_id, &payload.message_ts, &summary)
            .await
        {
            warn!(ts = %payload.message_ts, error = %err, "summary delivery failed");
            return Ok(PipelineStatus::SlackApiError);
        }

        debug!(ts = %payload.message_ts, "summary delivered");
        Ok(PipelineStatus::Success)
    }

    /// Best-effort user-facing notice into the originating thread.
    async fn notify(&self, payload: &NotificationPayload, text: &str) {
        if let Err(err) = self
            .publisher
            .publish(&payload.channel_id, &payload.message_ts, text)
            .await
        {
            warn!(ts = %payload.message_ts, error = %err, "failed to post failure notice");
        }
    }
}
