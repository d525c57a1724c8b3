//! Plain REST surface for clients that do not speak MCP.
//!
//! - POST /invoke `{"tool": ..., "args": {...}}` -> raw result, or 400 `{"error": ...}`
//! - GET /tools -> array of tool names
//! - GET /health -> `OK`

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use super::McpState;
use crate::types::tool::InvokeParams;
use crate::Handler;

#[tracing::instrument(skip(state, body), fields(tool = tracing::field::Empty))]
pub async fn invoke_handler<H: Handler>(
    State(state): State<Arc<McpState<H>>>,
    body: String,
) -> Response {
    let params: InvokeParams = match serde_json::from_str(&body) {
        Ok(params) => params,
        Err(e) => return bad_request(format!("Invalid invoke request: {}", e)),
    };
    tracing::Span::current().record("tool", params.tool.as_str());

    let handler = Arc::clone(&state.handler);
    let InvokeParams { tool, args } = params;
    match tokio::task::spawn_blocking(move || handler.invoke(&tool, args)).await {
        Ok(Ok(value)) => Json(value).into_response(),
        Ok(Err(e)) => bad_request(e.to_string()),
        Err(e) => {
            tracing::error!(error = %e, "Tool task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

pub async fn tools_handler<H: Handler>(State(state): State<Arc<McpState<H>>>) -> Json<Vec<String>> {
    Json(state.handler.tool_names())
}

pub async fn health_handler() -> &'static str {
    "OK"
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}
