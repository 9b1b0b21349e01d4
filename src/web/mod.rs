//! # HTTP surface
//!
//! Routers for the two demo services. Handlers receive their configuration
//! through axum `State`; nothing reads the process environment per request.

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::DiscoveryState;

use crate::config::ParameterConfig;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Parameter store demo: `GET /` echoes the injected parameters.
pub fn parameter_router(config: ParameterConfig) -> Router {
    Router::new()
        .route("/", get(handlers::echo_parameters))
        .with_state(Arc::new(config))
}

/// Service discovery demo: greeting, own message, and the A/B aggregation.
pub fn discovery_router(state: DiscoveryState) -> Router {
    Router::new()
        .route("/", get(handlers::hello))
        .route("/message", get(handlers::message))
        .route("/request", get(handlers::request))
        .with_state(state)
}
