// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `reldigest serve` command implementation.
//!
//! Wires the Slack, Anthropic, and trigger-scheduler clients into the
//! pipeline and starts the ingest gateway.

use std::sync::Arc;

use reldigest_anthropic::AnthropicClient;
use reldigest_config::DigestConfig;
use reldigest_core::DigestError;
use reldigest_pipeline::Pipeline;
use reldigest_scheduler::TriggerScheduler;
use reldigest_slack::SlackClient;
use tracing::info;

use crate::server::{start_server, GatewayState, ServerConfig};

/// Runs the `reldigest serve` command.
///
/// Builds each adapter from its config section and serves the gateway
/// until the process is terminated.
pub async fn run_serve(config: DigestConfig) -> Result<(), DigestError> {
    init_tracing(&config.service.log_level);

    info!(service = %config.service.name, "starting reldigest serve");

    let slack = Arc::new(SlackClient::from_config(&config.slack)?);
    let anthropic = Arc::new(AnthropicClient::from_config(&config.anthropic)?);
    let scheduler = Arc::new(TriggerScheduler::from_config(
        &config.scheduler,
        &config.slack,
    )?);

    let pipeline = Pipeline::new(
        scheduler,
        slack.clone(),
        anthropic,
        slack,
        config.scheduler.delay_secs,
    );

    let server_config = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
        bearer_token: config.gateway.bearer_token.clone(),
    };
    let state = GatewayState {
        pipeline: Arc::new(pipeline),
    };

    start_server(&server_config, state).await
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("reldigest={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
