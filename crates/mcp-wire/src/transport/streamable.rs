//! Streamable HTTP Transport
//!
//! - POST /mcp - Send JSON-RPC request, receive the reply directly
//! - DELETE /mcp - Terminate session
//! - Session ID via Mcp-Session-Id header

use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::McpState;
use crate::types::error::ErrorData;
use crate::types::jsonrpc::JsonRpcReply;
use crate::Handler;

pub(crate) const SESSION_HEADER: &str = "mcp-session-id";

/// Handle Streamable HTTP requests.
///
/// 1. Get or create session from Mcp-Session-Id header
/// 2. Parse and dispatch the JSON-RPC message
/// 3. Reply directly with the session header, or 202 for notifications
#[tracing::instrument(skip(state, headers, body), fields(session_id = tracing::field::Empty))]
pub async fn streamable_handler<H: Handler>(
    State(state): State<Arc<McpState<H>>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let session_id_hint = headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let session_id = state.sessions.get_or_create(session_id_hint.as_deref());
    tracing::Span::current().record("session_id", session_id.as_str());

    match crate::protocol::handle_text(&state, &session_id, &body).await {
        Some(reply) => {
            let status = status_for(&reply);
            build_response(status, &session_id, Json(reply))
        }
        None => build_response(StatusCode::ACCEPTED, &session_id, ()),
    }
}

/// Messages that never reached dispatch are the client's fault.
fn status_for(reply: &JsonRpcReply) -> StatusCode {
    match reply.error().map(|e| e.code) {
        Some(ErrorData::PARSE_ERROR) | Some(ErrorData::INVALID_REQUEST) => StatusCode::BAD_REQUEST,
        _ => StatusCode::OK,
    }
}

fn build_response<T: IntoResponse>(status: StatusCode, session_id: &str, body: T) -> Response {
    let mut response = body.into_response();
    *response.status_mut() = status;

    if let Ok(header_value) = HeaderValue::from_str(session_id) {
        response.headers_mut().insert(SESSION_HEADER, header_value);
    }

    response
}

/// Handle DELETE requests (session termination).
#[tracing::instrument(skip(state, headers), fields(session_id = tracing::field::Empty))]
pub async fn delete_handler<H: Handler>(
    State(state): State<Arc<McpState<H>>>,
    headers: HeaderMap,
) -> Response {
    let session_id = match headers.get(SESSION_HEADER).and_then(|v| v.to_str().ok()) {
        Some(id) => id.to_string(),
        None => {
            return (StatusCode::BAD_REQUEST, "Missing Mcp-Session-Id header").into_response();
        }
    };

    tracing::Span::current().record("session_id", session_id.as_str());

    if state.sessions.remove(&session_id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}
