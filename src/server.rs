//! # Server runner
//!
//! Serves a router until SIGINT (or SIGTERM on unix) arrives. In-flight
//! requests are not drained: once the signal fires, `run` returns and the
//! binary exits with status 0.

use std::future::{Future, IntoFuture};

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::config::listen_url;
use crate::utils::error::Result;

pub async fn bind(addr: &str) -> Result<TcpListener> {
    let listener = TcpListener::bind(addr).await?;
    info!("Example app listening at {}", listen_url(&listener.local_addr()?));
    Ok(listener)
}

pub async fn run(listener: TcpListener, router: Router) -> Result<()> {
    run_until(listener, router, shutdown_signal()).await
}

/// Like [`run`], with the shutdown trigger supplied by the caller.
pub async fn run_until<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send,
{
    tokio::select! {
        served = axum::serve(listener, router).into_future() => served?,
        _ = shutdown => info!("Shutdown signal received, exiting"),
    }
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
