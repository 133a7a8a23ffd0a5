// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway surface of the reldigest service.
//!
//! The binary in `main.rs` is a thin clap wrapper around [`serve::run_serve`];
//! everything HTTP-shaped lives here so integration tests can drive the
//! router directly.

pub mod auth;
pub mod handlers;
pub mod serve;
pub mod server;

pub use auth::AuthConfig;
pub use server::{build_router, start_server, GatewayState, ServerConfig};
