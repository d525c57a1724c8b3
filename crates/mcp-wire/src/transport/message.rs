//! Message Handler
//!
//! Handles POST /message requests for the SSE transport.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{sse::Event, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::McpState;
use crate::session::SseSender;
use crate::types::error::ErrorData;
use crate::types::jsonrpc::JsonRpcReply;
use crate::Handler;

#[derive(Debug, Deserialize)]
pub struct MessageParams {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

/// Dispatch one message and push the reply onto the session's SSE stream.
///
/// Returns 202 once the message is accepted, 404 for an unknown session.
#[tracing::instrument(skip(state, body), fields(session_id = %params.session_id))]
pub async fn message_handler<H: Handler>(
    State(state): State<Arc<McpState<H>>>,
    Query(params): Query<MessageParams>,
    body: String,
) -> Response {
    // Clone the sender so no DashMap lock is held across an await.
    let tx: Option<SseSender> = {
        let mut session = match state.sessions.get_mut(&params.session_id) {
            Some(s) => s,
            None => {
                let reply =
                    JsonRpcReply::failure(None, ErrorData::invalid_request("Session not found"));
                return (StatusCode::NOT_FOUND, Json(reply)).into_response();
            }
        };
        session.touch();
        session.tx.clone()
    };

    let Some(reply) = crate::protocol::handle_text(&state, &params.session_id, &body).await else {
        return StatusCode::ACCEPTED.into_response();
    };

    let data = match serde_json::to_string(&reply) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize reply");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let event = Event::default().event("message").data(data);
    match tx {
        Some(sender) => {
            if let Err(e) = sender.send(Ok(event)).await {
                tracing::warn!(error = ?e, "Failed to send reply via SSE");
            }
        }
        None => tracing::warn!("No SSE connection for session, reply dropped"),
    }

    StatusCode::ACCEPTED.into_response()
}
