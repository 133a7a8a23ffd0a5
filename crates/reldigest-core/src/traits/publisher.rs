// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reply publisher trait for posting into the originating thread.

use async_trait::async_trait;

use crate::error::DigestError;

/// Posts a text message into a thread on the chat platform.
#[async_trait]
pub trait ReplyPublisher: Send + Sync {
    /// Posts `text` into the thread anchored at `(channel_id, thread_ts)`.
    ///
    /// A non-ok platform acknowledgment is reported the same way as a
    /// transport failure. One call, no retry.
    async fn publish(
        &self,
        channel_id: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<(), DigestError>;
}
