// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use reldigest_core::DigestError;
use tower_http::cors::CorsLayer;

use crate::auth::{auth_middleware, AuthConfig};
use crate::handlers;
use reldigest_pipeline::Pipeline;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Pipeline orchestrator behind the ingest/execute routes.
    pub pipeline: Arc<Pipeline>,
}

/// Gateway server configuration (mirrors GatewayConfig from reldigest-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Bearer token for auth (None = auth disabled).
    pub bearer_token: Option<String>,
}

/// Builds the gateway router.
///
/// Split out from [`start_server`] so tests can drive it with
/// `tower::ServiceExt::oneshot` without binding a socket.
pub fn build_router(state: GatewayState, auth: AuthConfig) -> Router {
    // Unauthenticated liveness route for the host platform.
    let public_routes = Router::new().route("/health", get(handlers::get_health));

    // Pipeline routes behind bearer auth.
    let api_routes = Router::new()
        .route("/v1/ingest", post(handlers::post_ingest))
        .route("/v1/execute", post(handlers::post_execute))
        .route_layer(axum_middleware::from_fn_with_state(auth, auth_middleware))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(CorsLayer::permissive())
}

/// Start the gateway HTTP server.
///
/// Binds to the configured host:port and serves routes:
/// - POST /v1/ingest (with auth)
/// - POST /v1/execute (with auth)
/// - GET /health (public)
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), DigestError> {
    let auth = AuthConfig {
        bearer_token: config.bearer_token.clone(),
    };
    let app = build_router(state, auth);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| DigestError::Channel {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| DigestError::Channel {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}
