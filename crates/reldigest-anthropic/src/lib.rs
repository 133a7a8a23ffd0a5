// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Anthropic Messages API summarization client for reldigest.
//!
//! Implements the [`reldigest_core::Summarizer`] trait with a single-shot,
//! non-streaming request carrying the fixed release-note instruction prompt.

pub mod client;
pub mod types;

pub use client::{AnthropicClient, SYSTEM_PROMPT};
