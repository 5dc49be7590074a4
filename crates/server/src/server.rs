//! HTTP server lifecycle.

use std::net::SocketAddr;

use axum::Router;
use tracker_executor::Executor;

use crate::config::TrackerConfig;
use crate::error::ServerResult;
use crate::routes;

/// The issue tracker HTTP server.
#[derive(Debug)]
pub struct Server {
    config: TrackerConfig,
    executor: Executor,
}

impl Server {
    /// Creates a server over a fresh in-memory store.
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_executor(config, Executor::ephemeral())
    }

    /// Creates a server over an existing executor.
    pub fn with_executor(config: TrackerConfig, executor: Executor) -> Self {
        Self { config, executor }
    }

    /// The application router, with middleware applied.
    pub fn router(&self) -> Router {
        routes::router(self.executor.clone(), &self.config)
    }

    /// Runs the server until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the listen address is invalid or cannot be bound.
    pub async fn run(self) -> ServerResult<()> {
        let addr: SocketAddr = self.config.listen_addr()?;
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(addr).await?;
        let local = listener.local_addr()?;
        tracing::info!(addr = %local, cors = self.config.cors, "Starting issue tracker");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down gracefully");
        },
    }
}
