//! HTTP API for the AI marketing factory.
//!
//! Exposed as a library so integration tests can build the router against
//! an in-memory database and scripted vendors; the binary in `main.rs` is a
//! thin wrapper that wires real ones in.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod webhook;

pub use config::{Config, ConfigError, WorkflowMode};
pub use error::{ApiError, Result};
pub use state::AppState;

use axum::Router;

/// Build the application router for the given state.
pub fn app(state: AppState) -> Router {
    routes::router().with_state(state)
}
