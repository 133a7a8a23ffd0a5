// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slack Web API wire types and their mapping into domain types.

use reldigest_core::{Attachment, LayoutBlock, SourceMessage};
use serde::{Deserialize, Serialize};

/// Request body for `chat.postMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct PostMessageRequest {
    /// Target conversation.
    pub channel: String,
    /// Message text.
    pub text: String,
    /// Thread anchor timestamp.
    pub thread_ts: String,
}

/// Acknowledgment envelope shared by Slack Web API write endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiAck {
    /// Platform-level success flag. `false` means the call was received
    /// but rejected (bad channel, missing scope, ...).
    pub ok: bool,
    /// Error code when `ok` is `false`.
    #[serde(default)]
    pub error: Option<String>,
}

/// Response body for `conversations.history`.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub messages: Vec<WireMessage>,
}

/// A message record as returned by `conversations.history`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireMessage {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub attachments: Vec<WireAttachment>,
    #[serde(default)]
    pub blocks: Vec<WireBlock>,
}

/// A legacy attachment on a message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireAttachment {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub fallback: Option<String>,
}

/// A layout block on a message. Section blocks nest their text in a
/// `{type, text}` object; other block types are carried for ordering but
/// contribute no text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireBlock {
    #[serde(rename = "type", default)]
    pub block_type: String,
    #[serde(default)]
    pub text: Option<WireBlockText>,
}

/// The nested text object of a section block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireBlockText {
    #[serde(default)]
    pub text: String,
}

impl From<WireMessage> for SourceMessage {
    fn from(msg: WireMessage) -> Self {
        SourceMessage {
            text: msg.text,
            attachments: msg
                .attachments
                .into_iter()
                .map(|a| Attachment {
                    text: a.text,
                    fallback: a.fallback,
                })
                .collect(),
            blocks: msg
                .blocks
                .into_iter()
                .map(|b| LayoutBlock {
                    kind: b.block_type,
                    text: b.text.map(|t| t.text),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_message_maps_all_representations() {
        let json = serde_json::json!({
            "type": "message",
            "text": "New release",
            "attachments": [
                {"text": "Release notes body", "fallback": "v2.0 released"},
                {"fallback": "fallback only"}
            ],
            "blocks": [
                {"type": "section", "text": {"type": "mrkdwn", "text": "What's new"}},
                {"type": "divider"}
            ]
        });

        let wire: WireMessage = serde_json::from_value(json).unwrap();
        let msg: SourceMessage = wire.into();

        assert_eq!(msg.text, "New release");
        assert_eq!(msg.attachments.len(), 2);
        assert_eq!(msg.attachments[0].text.as_deref(), Some("Release notes body"));
        assert_eq!(msg.attachments[1].fallback.as_deref(), Some("fallback only"));
        assert_eq!(msg.blocks[0].kind, "section");
        assert_eq!(msg.blocks[0].text.as_deref(), Some("What's new"));
        assert_eq!(msg.blocks[1].kind, "divider");
        assert!(msg.blocks[1].text.is_none());
    }

    #[test]
    fn wire_message_tolerates_sparse_records() {
        // Slack omits fields that are empty; every field must default.
        let wire: WireMessage = serde_json::from_value(serde_json::json!({})).unwrap();
        let msg: SourceMessage = wire.into();
        assert!(msg.text.is_empty());
        assert!(msg.attachments.is_empty());
        assert!(msg.blocks.is_empty());
    }
}
