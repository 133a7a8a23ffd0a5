// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./reldigest.toml` > `~/.config/reldigest/reldigest.toml`
//! > `/etc/reldigest/reldigest.toml` with environment variable overrides via
//! `RELDIGEST_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::DigestConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/reldigest/reldigest.toml` (system-wide)
/// 3. `~/.config/reldigest/reldigest.toml` (user XDG config)
/// 4. `./reldigest.toml` (local directory)
/// 5. `RELDIGEST_*` environment variables
pub fn load_config() -> Result<DigestConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DigestConfig::default()))
        .merge(Toml::file("/etc/reldigest/reldigest.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("reldigest/reldigest.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("reldigest.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<DigestConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DigestConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<DigestConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DigestConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `RELDIGEST_SLACK_BOT_TOKEN` must map to
/// `slack.bot_token`, not `slack.bot.token`.
fn env_provider() -> Env {
    Env::prefixed("RELDIGEST_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped.
        // Example: RELDIGEST_ANTHROPIC_API_KEY -> "anthropic_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("service_", "service.", 1)
            .replacen("slack_", "slack.", 1)
            .replacen("anthropic_", "anthropic.", 1)
            .replacen("scheduler_", "scheduler.", 1)
            .replacen("gateway_", "gateway.", 1);
        mapped.into()
    })
}
