// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway REST API.
//!
//! Handles POST /v1/ingest, POST /v1/execute, GET /health.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use reldigest_core::{JobHandle, NotificationPayload, PipelineStatus};

use crate::server::GatewayState;

/// Request body for POST /v1/ingest and POST /v1/execute.
#[derive(Debug, Deserialize)]
pub struct TriggerRequest {
    /// Channel the release notification was posted in.
    pub channel_id: String,
    /// Timestamp of the notification message.
    pub message_ts: String,
    /// Message text as seen at ingest time (may be empty).
    #[serde(default)]
    pub message_text: String,
    /// Scheduler-assigned trigger id, if the caller knows it (execute only).
    #[serde(default)]
    pub trigger_id: Option<String>,
}

/// Response body for the pipeline routes.
#[derive(Debug, Serialize)]
pub struct TriggerResponse {
    /// Terminal pipeline status for this request.
    pub status: PipelineStatus,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
}

impl TriggerRequest {
    fn into_parts(self) -> (NotificationPayload, Option<JobHandle>) {
        let payload = NotificationPayload {
            channel_id: self.channel_id,
            message_ts: self.message_ts,
            message_text: self.message_text,
        };
        (payload, self.trigger_id.map(JobHandle))
    }
}

/// POST /v1/ingest
///
/// Schedules a deferred summarization job for the given notification.
pub async fn post_ingest(
    State(state): State<GatewayState>,
    Json(body): Json<TriggerRequest>,
) -> Json<TriggerResponse> {
    let (payload, _) = body.into_parts();
    let status = state.pipeline.ingest(payload).await;
    Json(TriggerResponse { status })
}

/// POST /v1/execute
///
/// Runs the enrichment stages for a fired job and retires its trigger.
pub async fn post_execute(
    State(state): State<GatewayState>,
    Json(body): Json<TriggerRequest>,
) -> Json<TriggerResponse> {
    let (payload, handle) = body.into_parts();
    let status = state.pipeline.execute(payload, handle).await;
    Json(TriggerResponse { status })
}

/// GET /health
///
/// Unauthenticated liveness endpoint.
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
