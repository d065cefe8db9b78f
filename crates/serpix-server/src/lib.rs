//! Serpix arena server.
//!
//! Wires the simulation engine to WebSocket clients: a dedicated thread runs
//! the fixed-rate game loop, and the async transport forwards client input
//! to it and fans tick output back out.

use axum::routing::get;
use axum::Router;

pub mod config;
pub mod game_loop;
pub mod protocol;
pub mod state;
pub mod ws;

pub use serpix_core as core;

use crate::state::AppState;

/// HTTP routes: the game socket and a health check.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/ws", get(ws::ws_handler))
        .with_state(state)
}
