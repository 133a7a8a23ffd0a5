// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the reldigest pipeline.

use thiserror::Error;

/// The primary error type used across all reldigest adapters and pipeline stages.
///
/// Every variant is caught at the boundary of the stage that produced it and
/// converted into a terminal [`crate::PipelineStatus`]; none propagate past
/// the orchestrator.
#[derive(Debug, Error)]
pub enum DigestError {
    /// Configuration errors (invalid TOML, missing required fields).
    #[error("configuration error: {0}")]
    Config(String),

    /// Scheduler errors (trigger create/delete/list rejected).
    #[error("scheduler error: {message}")]
    Scheduling {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Chat platform read errors (history lookup failed).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Summarization service errors: a non-2xx upstream response (with its
    /// status code) or a 2xx response missing the summary segment (no code).
    #[error("{}", summarization_detail(*.status, .body))]
    Summarization { status: Option<u16>, body: String },

    /// Reply delivery errors (thread post rejected or unreachable).
    #[error("delivery error: {message}")]
    Delivery {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

fn summarization_detail(status: Option<u16>, body: &str) -> String {
    match status {
        Some(code) => format!("summarization error (status {code}): {body}"),
        None => format!("summarization error: {body}"),
    }
}

