// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slack Web API adapter for reldigest.
//!
//! Implements [`reldigest_core::MessageSource`] (inclusive point lookup of
//! one message via `conversations.history`) and
//! [`reldigest_core::ReplyPublisher`] (threaded reply via
//! `chat.postMessage`) on a single shared client.

pub mod client;
pub mod wire;

pub use client::SlackClient;
