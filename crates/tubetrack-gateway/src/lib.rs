// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP API surface for the tubetrack channel tracker.
//!
//! Exposes the channel registry and the daily summary engine over a small
//! JSON REST API built on axum.

pub mod handlers;
pub mod server;

pub use server::{build_router, start_server, GatewayState, ServerConfig};
