// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses and positive delays.

use crate::diagnostic::ConfigError;
use crate::model::DigestConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &DigestConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.gateway.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gateway.host must not be empty".to_string(),
        });
    } else {
        let addr = config.gateway.host.trim();
        let is_valid_ip = addr.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = addr
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!(
                    "gateway.host `{addr}` is not a valid IP address or hostname"
                ),
            });
        }
    }

    if config.scheduler.delay_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "scheduler.delay_secs must be positive; the delay exists to let \
                      Slack finish populating the message body"
                .to_string(),
        });
    }

    if config.anthropic.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "anthropic.model must not be empty".to_string(),
        });
    }

    if config.anthropic.max_tokens == 0 {
        errors.push(ConfigError::Validation {
            message: "anthropic.max_tokens must be positive".to_string(),
        });
    }

    for (key, url) in [
        ("slack.base_url", &config.slack.base_url),
        ("anthropic.base_url", &config.anthropic.base_url),
        ("scheduler.base_url", &config.scheduler.base_url),
    ] {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            errors.push(ConfigError::Validation {
                message: format!("{key} must be an http(s) URL, got `{url}`"),
            });
        }
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.service.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "service.log_level must be one of {}, got `{}`",
                valid_levels.join(", "),
                config.service.log_level
            ),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = DigestConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn zero_delay_is_rejected() {
        let mut config = DigestConfig::default();
        config.scheduler.delay_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("delay_secs")));
    }

    #[test]
    fn collects_all_errors_without_failing_fast() {
        let mut config = DigestConfig::default();
        config.scheduler.delay_secs = 0;
        config.anthropic.model = "  ".into();
        config.service.log_level = "loud".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let mut config = DigestConfig::default();
        config.slack.base_url = "ftp://slack.example".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("slack.base_url")));
    }
}
