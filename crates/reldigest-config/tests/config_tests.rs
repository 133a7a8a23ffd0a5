// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the reldigest configuration system.

use reldigest_config::model::DigestConfig;
use reldigest_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_digest_config() {
    let toml = r#"
[service]
name = "test-digest"
log_level = "debug"

[slack]
bot_token = "xoxb-123"
base_url = "https://slack.example/api"

[anthropic]
api_key = "sk-ant-123"
model = "claude-sonnet-4-20250514"
max_tokens = 2048

[scheduler]
delay_secs = 120

[gateway]
host = "0.0.0.0"
port = 9090
bearer_token = "secret"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.service.name, "test-digest");
    assert_eq!(config.service.log_level, "debug");
    assert_eq!(config.slack.bot_token.as_deref(), Some("xoxb-123"));
    assert_eq!(config.slack.base_url, "https://slack.example/api");
    assert_eq!(config.anthropic.api_key.as_deref(), Some("sk-ant-123"));
    assert_eq!(config.anthropic.max_tokens, 2048);
    assert_eq!(config.scheduler.delay_secs, 120);
    assert_eq!(config.gateway.host, "0.0.0.0");
    assert_eq!(config.gateway.port, 9090);
    assert_eq!(config.gateway.bearer_token.as_deref(), Some("secret"));
}

/// Missing optional sections use defaults without error.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty config should use defaults");
    let defaults = DigestConfig::default();
    assert_eq!(config.service.name, defaults.service.name);
    assert_eq!(config.scheduler.delay_secs, 60);
    assert_eq!(config.anthropic.api_version, "2023-06-01");
    assert_eq!(config.slack.base_url, "https://slack.com/api");
    assert!(config.gateway.bearer_token.is_none());
}

/// Unknown field in a section produces an unknown-field error.
#[test]
fn unknown_field_in_anthropic_produces_error() {
    let toml = r#"
[anthropic]
modle = "claude-sonnet-4-20250514"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("modle"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Unknown keys surface through load_and_validate_str as diagnostics.
#[test]
fn unknown_key_becomes_config_error_diagnostic() {
    let toml = r#"
[slack]
bot_tken = "xoxb-123"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce diagnostics");
    assert!(!errors.is_empty());
    let rendered = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    assert!(rendered.contains("bot_tken"), "got: {rendered}");
}

/// Semantic validation runs after deserialization.
#[test]
fn semantic_validation_rejects_zero_delay() {
    let toml = r#"
[scheduler]
delay_secs = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("zero delay should be rejected");
    let rendered = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    assert!(rendered.contains("delay_secs"), "got: {rendered}");
}

/// A wrong-typed value produces an invalid-type error, not a panic.
#[test]
fn wrong_type_produces_error() {
    let toml = r#"
[gateway]
port = "not-a-port"
"#;

    let err = load_config_from_str(toml).expect_err("should reject wrong type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("port"),
        "error should mention the type mismatch, got: {err_str}"
    );
}
