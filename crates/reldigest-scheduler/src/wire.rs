// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trigger API wire types.

use serde::{Deserialize, Serialize};

/// Request body for `workflows.triggers.create`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTriggerRequest {
    /// Always "scheduled" for a one-shot deferred job.
    #[serde(rename = "type")]
    pub trigger_type: String,
    /// Deterministic job name (the de-duplication key by convention).
    pub name: String,
    /// Workflow reference the trigger fires into.
    pub workflow: String,
    /// One-shot schedule.
    pub schedule: TriggerSchedule,
    /// Workflow inputs: the notification payload, wrapped in the trigger
    /// input `{value}` envelope.
    pub inputs: serde_json::Value,
}

/// One-shot schedule for a scheduled trigger.
#[derive(Debug, Clone, Serialize)]
pub struct TriggerSchedule {
    /// RFC 3339 fire time.
    pub start_time: String,
}

/// Response body for `workflows.triggers.create`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTriggerResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub trigger: Option<TriggerRecord>,
}

/// Request body for `workflows.triggers.delete`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteTriggerRequest {
    pub trigger_id: String,
}

/// Acknowledgment for `workflows.triggers.delete`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteTriggerResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response body for `workflows.triggers.list`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListTriggersResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub triggers: Vec<TriggerRecord>,
}

/// A trigger as referenced by the trigger API.
#[derive(Debug, Clone, Deserialize)]
pub struct TriggerRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
}
