//! # Service discovery demo
//!
//! Answers `/message` with its own `SERVICE_NAME` and aggregates the
//! `/message` answers of `myservice-a` and `myservice-b` on `/request`.

use std::sync::Arc;

use clap::Parser;
use ecs_demo_services::{
    discovery_router, server, DiscoveryConfig, DiscoveryState, HttpMessageSource, ServerArgs,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();
    args.init_logging();

    let config = DiscoveryConfig::from_env()?;
    tracing::info!(
        "Downstream services: {} and {}",
        config.service_a_url,
        config.service_b_url
    );

    let state = DiscoveryState::new(config, Arc::new(HttpMessageSource::new()));

    let listener = server::bind(&args.socket_addr()).await?;
    server::run(listener, discovery_router(state)).await?;

    Ok(())
}
