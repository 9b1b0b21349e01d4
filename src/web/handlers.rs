use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::config::ParameterConfig;
use crate::core::{AggregatedResponse, MessageResponse};
use crate::web::error::ApiError;
use crate::web::state::DiscoveryState;

pub const GREETING: &str = "HELLO WORLD!!";

/// GET / (parameter store demo)
pub async fn echo_parameters(State(config): State<Arc<ParameterConfig>>) -> String {
    config.render()
}

/// GET / (service discovery demo)
pub async fn hello() -> &'static str {
    GREETING
}

/// GET /message
pub async fn message(State(state): State<DiscoveryState>) -> Json<MessageResponse> {
    Json(MessageResponse::for_service(state.service_name.as_deref()))
}

/// GET /request
///
/// Calls service A, then service B, and returns both messages. Any downstream
/// failure fails the whole request.
pub async fn request(
    State(state): State<DiscoveryState>,
) -> Result<Json<AggregatedResponse>, ApiError> {
    let aggregated = state.aggregator.aggregate().await.map_err(|e| {
        tracing::debug!("Aggregation failed: {}", e);
        ApiError::from(e)
    })?;
    Ok(Json(aggregated))
}
