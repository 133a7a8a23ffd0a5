// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message source trait for the chat platform point lookup.

use async_trait::async_trait;

use crate::error::DigestError;
use crate::types::SourceMessage;

/// Reads a single message record from the chat platform.
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// Fetches the one message at or before `ts` (inclusive) in `channel_id`.
    ///
    /// Returns `Ok(None)` when the lookup succeeds but no record exists.
    async fn fetch_at(
        &self,
        channel_id: &str,
        ts: &str,
    ) -> Result<Option<SourceMessage>, DigestError>;
}
