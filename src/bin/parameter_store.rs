//! # Parameter store demo
//!
//! Echoes `MY_PARAM_1` and `MY_PARAM_2`, as injected into the container by
//! the task definition's `secrets`/`environment` blocks.

use clap::Parser;
use ecs_demo_services::{parameter_router, server, ParameterConfig, ServerArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();
    args.init_logging();

    let config = ParameterConfig::from_env();
    tracing::debug!("Parameter config: {:?}", config);

    let listener = server::bind(&args.socket_addr()).await?;
    server::run(listener, parameter_router(config)).await?;

    Ok(())
}
