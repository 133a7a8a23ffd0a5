// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the reldigest pipeline and adapters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// The notification as received from the host runtime at ingestion time.
///
/// Immutable: created once, passed by value through every stage, and carried
/// across the deferred-execution boundary inside the scheduled trigger
/// payload. `message_text` may be empty -- Slack populates release
/// notification bodies with some delay, which is the reason the pipeline
/// defers execution at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    /// Conversation the notification was posted into.
    pub channel_id: String,
    /// Slack message timestamp. Doubles as the thread anchor for replies
    /// and as the de-duplication key for job naming.
    pub message_ts: String,
    /// Message body known at ingestion time. May be empty.
    #[serde(default)]
    pub message_text: String,
}

/// Opaque handle assigned by the scheduler when a trigger is created.
///
/// The host runtime does not always propagate it to the executing side,
/// so retirement must also work by deterministic name lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobHandle(pub String);

/// Selector for job retirement: either the scheduler-assigned handle or
/// the deterministic job name used as a fallback lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobSelector {
    Handle(JobHandle),
    Name(String),
}

/// Derives the deterministic job name for a notification.
///
/// Pure function of the message timestamp; the naming convention is the
/// only de-duplication key the system has (not enforced atomically).
pub fn job_name(message_ts: &str) -> String {
    format!("digest-{message_ts}")
}

/// A one-shot deferred execution record handed to the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledJob {
    /// Deterministic name, derived via [`job_name`].
    pub name: String,
    /// When the host should fire the deferred execution.
    pub fires_at: DateTime<Utc>,
    /// The notification to process when the job fires.
    pub payload: NotificationPayload,
}

impl ScheduledJob {
    /// Builds a job for `payload` firing at `fires_at`.
    pub fn new(payload: NotificationPayload, fires_at: DateTime<Utc>) -> Self {
        Self {
            name: job_name(&payload.message_ts),
            fires_at,
            payload,
        }
    }
}

/// Terminal outcome of one pipeline invocation.
///
/// The string form is the sole observable contract with the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PipelineStatus {
    /// Ingest phase created the deferred job.
    Scheduled,
    /// Summary produced and delivered to the thread.
    Success,
    /// No reconstructable text; a failure notice was posted instead.
    EmptyMessage,
    /// The summarization service rejected or garbled the request.
    ClaudeApiError,
    /// The summary could not be posted to the thread.
    SlackApiError,
    /// The scheduler rejected job creation at ingest time.
    TriggerCreationFailed,
    /// Anything uncaught by the stages above.
    Error,
}

/// The structured message record returned by the chat platform point lookup.
///
/// Release notifications carry their content redundantly across up to three
/// representations; any of them may be empty at any given moment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMessage {
    /// Primary text field.
    pub text: String,
    /// Legacy attachments, in source order.
    pub attachments: Vec<Attachment>,
    /// Layout blocks, in source order.
    pub blocks: Vec<LayoutBlock>,
}

/// A legacy message attachment: rich `text` with a plain `fallback`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attachment {
    pub text: Option<String>,
    pub fallback: Option<String>,
}

/// A layout block. Only `section` blocks carry reconstructable text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutBlock {
    /// Block type discriminator (e.g. "section", "divider").
    pub kind: String,
    /// Nested textual content, when the block type has any.
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_name_is_deterministic() {
        assert_eq!(job_name("1700000000.000100"), job_name("1700000000.000100"));
        assert_ne!(job_name("1700000000.000100"), job_name("1700000000.000200"));
        assert_eq!(job_name("1712345678.000001"), "digest-1712345678.000001");
    }

    #[test]
    fn pipeline_status_string_forms() {
        let cases = [
            (PipelineStatus::Scheduled, "scheduled"),
            (PipelineStatus::Success, "success"),
            (PipelineStatus::EmptyMessage, "empty_message"),
            (PipelineStatus::ClaudeApiError, "claude_api_error"),
            (PipelineStatus::SlackApiError, "slack_api_error"),
            (PipelineStatus::TriggerCreationFailed, "trigger_creation_failed"),
            (PipelineStatus::Error, "error"),
        ];
        for (status, expected) in cases {
            assert_eq!(status.to_string(), expected);
            let json = serde_json::to_string(&status).expect("should serialize");
            assert_eq!(json, format!("\"{expected}\""));
        }
    }

    #[test]
    fn payload_roundtrips_through_json() {
        let payload = NotificationPayload {
            channel_id: "C0ABJFC3T1S".into(),
            message_ts: "1700000000.000100".into(),
            message_text: "v2.0 released".into(),
        };
        let json = serde_json::to_string(&payload).expect("should serialize");
        let parsed: NotificationPayload =
            serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(payload, parsed);
    }

    #[test]
    fn payload_text_defaults_to_empty() {
        // The host can omit message_text entirely when Slack has not
        // populated the body yet.
        let parsed: NotificationPayload = serde_json::from_str(
            r#"{"channel_id": "C1", "message_ts": "1.2"}"#,
        )
        .expect("should deserialize");
        assert!(parsed.message_text.is_empty());
    }
}
