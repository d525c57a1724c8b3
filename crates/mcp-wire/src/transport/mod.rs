//! MCP Transports
//!
//! ## Streamable HTTP
//! - POST /mcp - Send JSON-RPC request, receive the reply directly
//! - DELETE /mcp - Terminate session
//! - Session ID via Mcp-Session-Id header
//!
//! ## SSE
//! - GET /sse - Establish SSE connection, receive replies
//! - POST /message?sessionId=... - Send JSON-RPC requests
//!
//! ## REST
//! - POST /invoke, GET /tools, GET /health
//!
//! ## stdio
//! - Newline-delimited JSON-RPC over any reader/writer pair

mod message;
mod rest;
mod sse;
mod stdio;
mod streamable;

pub use message::message_handler;
pub use rest::{health_handler, invoke_handler, tools_handler};
pub use sse::sse_handler;
pub use stdio::{serve_stdio, STDIO_SESSION};
pub use streamable::{delete_handler, streamable_handler};

use axum::Router;
use std::sync::Arc;

use crate::session::{InMemorySessionStore, SessionStore};
use crate::Handler;

/// Shared state for MCP handlers.
pub struct McpState<H> {
    /// The application's tool handler.
    pub handler: Arc<H>,

    pub sessions: Arc<dyn SessionStore>,
}

impl<H> McpState<H> {
    pub fn new(handler: H) -> Self {
        Self::with_session_store(handler, Arc::new(InMemorySessionStore::new()))
    }

    pub fn with_session_store(handler: H, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            handler: Arc::new(handler),
            sessions,
        }
    }
}

/// Streamable HTTP transport plus the REST surface.
///
/// Routes:
/// - POST /mcp, DELETE /mcp
/// - POST /invoke, GET /tools, GET /health
pub fn http_router<H: Handler>(state: Arc<McpState<H>>) -> Router {
    Router::new()
        .route(
            "/mcp",
            axum::routing::post(streamable_handler::<H>).delete(delete_handler::<H>),
        )
        .with_state(Arc::clone(&state))
        .merge(rest_router(state))
}

/// SSE transport plus the REST surface.
///
/// Routes:
/// - GET /sse, POST /message
/// - POST /invoke, GET /tools, GET /health
pub fn sse_router<H: Handler>(state: Arc<McpState<H>>) -> Router {
    Router::new()
        .route("/sse", axum::routing::get(sse_handler::<H>))
        .route("/message", axum::routing::post(message_handler::<H>))
        .with_state(Arc::clone(&state))
        .merge(rest_router(state))
}

/// REST routes alone.
pub fn rest_router<H: Handler>(state: Arc<McpState<H>>) -> Router {
    Router::new()
        .route("/invoke", axum::routing::post(invoke_handler::<H>))
        .route("/tools", axum::routing::get(tools_handler::<H>))
        .route("/health", axum::routing::get(health_handler))
        .with_state(state)
}
