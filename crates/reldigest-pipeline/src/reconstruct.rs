// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text reconstruction from partially-overlapping message representations.
//!
//! Release notifications carry their content redundantly: a primary text
//! field, legacy attachments (rich text with a plain fallback), and layout
//! blocks. Any subset may be empty at a given moment because Slack
//! populates them with eventual consistency. Reconstruction combines
//! whatever is present, in source order and without exact duplicates.

use reldigest_core::{MessageSource, SourceMessage};
use tracing::warn;

/// Best-effort reconstruction of the full notification text.
///
/// Performs exactly one upstream read. A failed lookup or an absent record
/// yields the empty string -- the orchestrator treats that as "nothing to
/// summarize", not as an error.
pub async fn reconstruct(source: &dyn MessageSource, channel_id: &str, ts: &str) -> String {
    match source.fetch_at(channel_id, ts).await {
        Ok(Some(msg)) => assemble(&msg),
        Ok(None) => String::new(),
        Err(err) => {
            warn!(channel_id, ts, error = %err, "message lookup failed during reconstruction");
            String::new()
        }
    }
}

/// Assembles the ordered, de-duplicated fragment concatenation.
///
/// Fragment order: primary text, then each attachment's text (falling back
/// to its `fallback` field), then each `section` block's text. Blank
/// fragments and exact duplicates are skipped; survivors are joined with a
/// blank-line separator. Pure function of the record.
pub fn assemble(msg: &SourceMessage) -> String {
    let mut fragments: Vec<&str> = Vec::new();

    push_fragment(&mut fragments, &msg.text);

    for attachment in &msg.attachments {
        let candidate = attachment
            .text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or(attachment.fallback.as_deref());
        if let Some(text) = candidate {
            push_fragment(&mut fragments, text);
        }
    }

    for block in &msg.blocks {
        if block.kind == "section"
            && let Some(text) = block.text.as_deref()
        {
            push_fragment(&mut fragments, text);
        }
    }

    fragments.join("\n\n")
}

/// Appends `candidate` unless it is blank or already present verbatim.
fn push_fragment<'a>(fragments: &mut Vec<&'a str>, candidate: &'a str) {
    if candidate.trim().is_empty() {
        return;
    }
    if fragments.contains(&candidate) {
        return;
    }
    fragments.push(candidate);
}
