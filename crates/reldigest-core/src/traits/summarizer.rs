// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Summarizer trait for the external language-model service.

use async_trait::async_trait;

use crate::error::DigestError;

/// Produces a natural-language summary of a release notification.
///
/// One request, one response: no retry, no streaming, no multi-turn.
/// A failed attempt is reported to the caller, never retried here.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarizes `text`, returning the summary string.
    async fn summarize(&self, text: &str) -> Result<String, DigestError>;
}
