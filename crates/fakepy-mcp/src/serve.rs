//! Transport selection and the server lifecycle.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

use mcp_wire::{http_router, serve_stdio, spawn_cleanup_task, sse_router, McpState};

use crate::handler::FakerHandler;

const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Which transport to serve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Newline-delimited JSON-RPC on stdin/stdout
    #[default]
    Stdio,
    /// Streamable HTTP at /mcp plus the REST endpoints
    Http,
    /// SSE at /sse and /message plus the REST endpoints
    Sse,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Mode::Stdio => "STDIO",
            Mode::Http => "HTTP",
            Mode::Sse => "SSE",
        })
    }
}

pub struct ServeConfig {
    pub mode: Mode,
    pub host: String,
    pub port: u16,
    pub session_idle: Duration,
}

/// Serve until the transport closes or a shutdown signal arrives.
pub async fn run(handler: FakerHandler, config: ServeConfig) -> Result<()> {
    let state = Arc::new(McpState::new(handler));

    match config.mode {
        Mode::Stdio => {
            info!("Starting MCP server in STDIO mode");
            let stdio = serve_stdio(Arc::clone(&state), tokio::io::stdin(), tokio::io::stdout());
            tokio::select! {
                result = stdio => {
                    result.context("stdio transport failed")?;
                    info!("stdin closed");
                }
                _ = shutdown_signal() => {}
            }
        }
        Mode::Http | Mode::Sse => {
            info!(
                "Starting MCP server in {} mode on {}:{}",
                config.mode, config.host, config.port
            );

            let cancel = CancellationToken::new();
            let cleanup = spawn_cleanup_task(
                Arc::clone(&state.sessions),
                CLEANUP_INTERVAL,
                config.session_idle,
                cancel.clone(),
            );

            let app = match config.mode {
                Mode::Sse => sse_router(state),
                _ => http_router(state),
            };

            let addr = format!("{}:{}", config.host, config.port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind to {}", addr))?;

            match config.mode {
                Mode::Sse => info!(
                    "   MCP (SSE): GET http://{}/sse + POST http://{}/message",
                    addr, addr
                ),
                _ => info!("   MCP (Streamable): POST http://{}/mcp", addr),
            }
            info!("   REST: POST http://{}/invoke, GET http://{}/tools", addr, addr);

            let served = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await
                .context("Server error");

            cancel.cancel();
            let _ = cleanup.await;
            served?;
        }
    }

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            match result {
                Ok(()) => info!("Received SIGINT, shutting down..."),
                Err(e) => {
                    tracing::warn!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        }
        _ = terminate() => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{signal, SignalKind};
    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            tracing::warn!("Failed to listen for SIGTERM: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}
