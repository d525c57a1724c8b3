//! MCP Protocol Dispatch
//!
//! Routes JSON-RPC methods to the [`Handler`].
//!
//! Spans follow the OpenTelemetry JSON-RPC semantic conventions.
//! See: https://opentelemetry.io/docs/specs/semconv/rpc/json-rpc/

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::Instrument;

use crate::transport::McpState;
use crate::types::error::{ErrorData, ToolError};
use crate::types::jsonrpc::{JsonRpcMessage, JsonRpcReply, RequestId};
use crate::types::protocol::{
    Implementation, InitializeParams, InitializeResult, ServerCapabilities,
};
use crate::types::tool::{CallToolParams, CallToolResult, InvokeParams, ListToolsResult, Tool};

/// Handler trait for MCP server implementations.
///
/// Tool invocations are synchronous; the dispatcher runs them on the
/// blocking pool so a slow tool never stalls a transport.
pub trait Handler: Send + Sync + 'static {
    /// Return the list of available tools.
    fn tools(&self) -> Vec<Tool>;

    /// Tool names in listing order.
    fn tool_names(&self) -> Vec<String> {
        self.tools().into_iter().map(|tool| tool.name).collect()
    }

    /// Run a tool and return its JSON result.
    fn invoke(&self, name: &str, arguments: Value) -> Result<Value, ToolError>;

    /// `tools/call` semantics on top of [`Handler::invoke`].
    ///
    /// A tool that ran and failed is reported in-band as an error result.
    /// Unknown tools and unbindable arguments are protocol errors.
    fn call_tool(&self, name: &str, arguments: Value) -> Result<CallToolResult, ErrorData> {
        match self.invoke(name, arguments) {
            Ok(value) => Ok(CallToolResult::from_value(value)),
            Err(ToolError::Failed(message)) => Ok(CallToolResult::error(message)),
            Err(other) => Err(other.into()),
        }
    }

    /// Return server implementation info.
    fn server_info(&self) -> Implementation;

    /// Return instructions for the LLM.
    fn instructions(&self) -> Option<String> {
        None
    }

    fn capabilities(&self) -> ServerCapabilities {
        ServerCapabilities::with_tools()
    }
}

/// Dispatch a JSON-RPC message to the appropriate handler.
///
/// Creates a span following JSON-RPC semantic conventions:
/// - `rpc.system` = "jsonrpc"
/// - `rpc.method` = the JSON-RPC method name
/// - `rpc.jsonrpc.version` = "2.0"
/// - `rpc.jsonrpc.request_id` = the request ID (if present)
/// - `mcp.session_id` = the MCP session identifier
pub async fn dispatch<H: Handler>(
    state: &Arc<McpState<H>>,
    session_id: &str,
    message: &JsonRpcMessage,
) -> Result<Value, ErrorData> {
    let request_id_str = message
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    let span = tracing::info_span!(
        "mcp.dispatch",
        rpc.system = "jsonrpc",
        rpc.method = %message.method,
        rpc.jsonrpc.version = "2.0",
        rpc.jsonrpc.request_id = %request_id_str,
        mcp.session_id = %session_id,
        error.type = tracing::field::Empty,
        rpc.jsonrpc.error_code = tracing::field::Empty,
        rpc.jsonrpc.error_message = tracing::field::Empty,
    );

    async {
        state.sessions.touch(session_id);
        let result = dispatch_inner(state, session_id, message).await;

        if let Err(ref error) = result {
            record_error_on_span(error);
        }

        result
    }
    .instrument(span)
    .await
}

/// Handle one decoded JSON value from any transport.
///
/// Returns `None` for notifications. A value that is JSON but not a valid
/// request gets an invalid-request reply, keeping its id when one can be
/// recovered.
pub async fn handle_message<H: Handler>(
    state: &Arc<McpState<H>>,
    session_id: &str,
    body: Value,
) -> Option<JsonRpcReply> {
    let recovered_id = body
        .get("id")
        .and_then(|id| serde_json::from_value::<RequestId>(id.clone()).ok());

    let message: JsonRpcMessage = match serde_json::from_value(body) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected malformed JSON-RPC message");
            return Some(JsonRpcReply::failure(
                recovered_id,
                ErrorData::invalid_request(format!("Invalid request: {}", e)),
            ));
        }
    };

    let result = dispatch(state, session_id, &message).await;

    match message.id {
        Some(id) => Some(JsonRpcReply::from_result(id, result)),
        None => {
            if let Err(error) = result {
                tracing::debug!(method = %message.method, %error, "Notification failed");
            }
            None
        }
    }
}

/// Like [`handle_message`], starting from raw text. Text that is not JSON
/// gets a parse-error reply with a null id.
pub async fn handle_text<H: Handler>(
    state: &Arc<McpState<H>>,
    session_id: &str,
    text: &str,
) -> Option<JsonRpcReply> {
    match serde_json::from_str::<Value>(text) {
        Ok(body) => handle_message(state, session_id, body).await,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse JSON-RPC message");
            Some(JsonRpcReply::failure(
                None,
                ErrorData::parse_error(format!("Parse error: {}", e)),
            ))
        }
    }
}

fn record_error_on_span(error: &ErrorData) {
    let span = tracing::Span::current();
    span.record("error.type", error_type_for_code(error.code));
    span.record("rpc.jsonrpc.error_code", error.code);
    span.record("rpc.jsonrpc.error_message", error.message.as_str());
}

fn error_type_for_code(code: i32) -> &'static str {
    match code {
        ErrorData::PARSE_ERROR => "parse_error",
        ErrorData::INVALID_REQUEST => "invalid_request",
        ErrorData::METHOD_NOT_FOUND => "method_not_found",
        ErrorData::INVALID_PARAMS => "invalid_params",
        ErrorData::INTERNAL_ERROR => "internal_error",
        _ => "application_error",
    }
}

async fn dispatch_inner<H: Handler>(
    state: &Arc<McpState<H>>,
    session_id: &str,
    message: &JsonRpcMessage,
) -> Result<Value, ErrorData> {
    match message.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(state, session_id, message),
        "notifications/initialized" => Ok(Value::Null),
        "ping" => Ok(serde_json::json!({})),

        // Tools
        "tools/list" => to_value(&ListToolsResult::all(state.handler.tools())),
        "tools/call" => handle_call_tool(state, session_id, message).await,

        // Legacy
        "list_tools" => Ok(Value::from(state.handler.tool_names())),
        "invoke" => handle_invoke(state, session_id, message).await,

        _ => Err(ErrorData::method_not_found(&message.method)),
    }
}

fn handle_initialize<H: Handler>(
    state: &Arc<McpState<H>>,
    session_id: &str,
    request: &JsonRpcMessage,
) -> Result<Value, ErrorData> {
    let params: InitializeParams = parse_params(request, "initialize")?.unwrap_or_default();

    state.sessions.set_initialized(session_id, params.client_info);

    let result = InitializeResult::new(state.handler.server_info(), state.handler.capabilities());
    let result = match state.handler.instructions() {
        Some(instructions) => result.with_instructions(instructions),
        None => result,
    };

    to_value(&result)
}

async fn handle_call_tool<H: Handler>(
    state: &Arc<McpState<H>>,
    session_id: &str,
    request: &JsonRpcMessage,
) -> Result<Value, ErrorData> {
    let params: CallToolParams = parse_params(request, "call")?
        .ok_or_else(|| ErrorData::invalid_params("Missing call params"))?;

    let arguments = match params.arguments {
        None | Some(Value::Null) => Value::Object(serde_json::Map::new()),
        Some(arguments) => arguments,
    };

    let tool_span = tracing::info_span!(
        "mcp.tool.call",
        mcp.tool.name = %params.name,
        mcp.session_id = %session_id,
    );

    async {
        let handler = Arc::clone(&state.handler);
        let name = params.name.clone();
        let result = tokio::task::spawn_blocking(move || handler.call_tool(&name, arguments))
            .await
            .map_err(|e| ErrorData::internal_error(format!("Tool task failed: {}", e)))??;

        to_value(&result)
    }
    .instrument(tool_span)
    .await
}

async fn handle_invoke<H: Handler>(
    state: &Arc<McpState<H>>,
    session_id: &str,
    request: &JsonRpcMessage,
) -> Result<Value, ErrorData> {
    let params: InvokeParams = parse_params(request, "invoke")?
        .ok_or_else(|| ErrorData::invalid_params("Missing invoke params"))?;

    let tool_span = tracing::info_span!(
        "mcp.tool.call",
        mcp.tool.name = %params.tool,
        mcp.session_id = %session_id,
    );

    async {
        let handler = Arc::clone(&state.handler);
        let InvokeParams { tool, args } = params;
        let result = tokio::task::spawn_blocking(move || handler.invoke(&tool, args))
            .await
            .map_err(|e| ErrorData::internal_error(format!("Tool task failed: {}", e)))?;

        result.map_err(ErrorData::from)
    }
    .instrument(tool_span)
    .await
}

fn parse_params<T: DeserializeOwned>(
    request: &JsonRpcMessage,
    what: &str,
) -> Result<Option<T>, ErrorData> {
    request
        .params
        .as_ref()
        .map(|p| serde_json::from_value(p.clone()))
        .transpose()
        .map_err(|e| ErrorData::invalid_params(format!("Invalid {} params: {}", what, e)))
}

fn to_value<T: serde::Serialize>(result: &T) -> Result<Value, ErrorData> {
    serde_json::to_value(result)
        .map_err(|e| ErrorData::internal_error(format!("Failed to serialize result: {}", e)))
}
