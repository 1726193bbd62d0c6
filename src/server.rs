//! HTTP server initialization and runtime setup.
//!
//! Handles registry creation, log worker spawning, and Axum server lifecycle.

use crate::config::Config;
use crate::domain::event_logger::EventLogger;
use crate::domain::log_worker::run_log_worker;
use crate::infrastructure::persistence::InMemoryLinkRepository;
use crate::infrastructure::remote_log::{HttpLogTransport, LogTransport, NullLogTransport};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory link registry
/// - Remote log transport (or NullLogTransport fallback)
/// - Background log worker
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let link_repository = Arc::new(InMemoryLinkRepository::new());

    let transport = build_transport(&config);

    let events = if transport.is_enabled() {
        let (log_tx, log_rx) = mpsc::channel(config.log_queue_capacity);

        tokio::spawn(run_log_worker(log_rx, transport));
        tracing::info!("Log worker started");

        EventLogger::new(log_tx)
    } else {
        EventLogger::local_only()
    };

    if !events.is_remote() {
        tracing::info!("Remote logging disabled, events go to local log only");
    }

    let state = AppState::new(
        link_repository,
        events,
        config.base_url.clone(),
        config.default_validity_minutes,
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Picks the log transport for the configured collector.
///
/// Falls back to [`NullLogTransport`] when no collector is configured or the
/// HTTP client cannot be built.
fn build_transport(config: &Config) -> Arc<dyn LogTransport> {
    let (Some(endpoint), Some(token)) = (&config.log_endpoint, &config.log_token) else {
        return Arc::new(NullLogTransport::new());
    };

    match HttpLogTransport::new(
        endpoint.clone(),
        token.clone(),
        Duration::from_secs(config.log_timeout_seconds),
    ) {
        Ok(transport) => {
            tracing::info!("Remote logging enabled ({})", endpoint);
            Arc::new(transport)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to build log transport: {}. Using NullLogTransport.",
                e
            );
            Arc::new(NullLogTransport::new())
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
