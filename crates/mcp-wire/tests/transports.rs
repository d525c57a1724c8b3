//! Drive the routers and the stdio loop end to end.

use axum::body::{Body, BodyDataStream};
use axum::http::{Request, StatusCode};
use futures::StreamExt;
use mcp_wire::{
    http_router, serve_stdio, sse_router, Implementation, McpState, Tool, ToolError,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tower::ServiceExt;

struct Greeter;

impl mcp_wire::Handler for Greeter {
    fn tools(&self) -> Vec<Tool> {
        vec![Tool::new("greet", "Greet someone")]
    }

    fn invoke(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        match name {
            "greet" => {
                let who = arguments
                    .get("name")
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        ToolError::InvalidArguments("missing required argument 'name'".into())
                    })?;
                Ok(json!(format!("Hello, {}!", who)))
            }
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }

    fn server_info(&self) -> Implementation {
        Implementation::new("greeter", "0.1.0")
    }
}

fn state() -> Arc<McpState<Greeter>> {
    Arc::new(McpState::new(Greeter))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = http_router(state())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn test_tools_lists_names() {
    let response = sse_router(state())
        .oneshot(Request::get("/tools").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!(["greet"]));
}

#[tokio::test]
async fn test_invoke_returns_raw_value() {
    let response = http_router(state())
        .oneshot(post("/invoke", r#"{"tool": "greet", "args": {"name": "Ada"}}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!("Hello, Ada!"));
}

#[tokio::test]
async fn test_invoke_errors_are_400() {
    let app = http_router(state());

    let response = app
        .clone()
        .oneshot(post("/invoke", r#"{"tool": "greet"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("missing"));

    let response = app
        .oneshot(post("/invoke", r#"{"tool": "nope"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Tool not found: nope");
}

#[tokio::test]
async fn test_streamable_round_trip_keeps_session() {
    let state = state();
    let app = http_router(Arc::clone(&state));

    let init = json!({
        "jsonrpc": "2.0", "id": 1, "method": "initialize",
        "params": { "protocolVersion": "2025-06-18", "clientInfo": { "name": "t", "version": "1" } }
    });
    let response = app.clone().oneshot(post("/mcp", init.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let session_id = response
        .headers()
        .get("mcp-session-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(body_json(response).await["result"]["serverInfo"]["name"], "greeter");

    let notify = json!({ "jsonrpc": "2.0", "method": "notifications/initialized" });
    let request = Request::post("/mcp")
        .header("mcp-session-id", &session_id)
        .body(Body::from(notify.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let call = json!({
        "jsonrpc": "2.0", "id": 2, "method": "tools/call",
        "params": { "name": "greet", "arguments": { "name": "Grace" } }
    });
    let request = Request::post("/mcp")
        .header("mcp-session-id", &session_id)
        .body(Body::from(call.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["id"], 2);
    assert_eq!(body["result"]["content"][0]["text"], "Hello, Grace!");
    assert_eq!(state.sessions.stats().total, 1);

    let request = Request::delete("/mcp")
        .header("mcp-session-id", &session_id)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(state.sessions.stats().total, 0);
}

#[tokio::test]
async fn test_streamable_parse_error() {
    let response = http_router(state())
        .oneshot(post("/mcp", "{oops"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["id"], Value::Null);
    assert_eq!(body["error"]["code"], -32700);
}

#[tokio::test]
async fn test_message_for_unknown_session_is_404() {
    let response = sse_router(state())
        .oneshot(post("/message?sessionId=missing", r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_message_is_accepted_for_known_session() {
    let state = state();
    let session_id = state.sessions.get_or_create(None);
    let response = sse_router(state)
        .oneshot(post(
            &format!("/message?sessionId={}", session_id),
            r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

/// Reads `event:`/`data:` frames off an SSE response body.
struct SseEvents {
    body: BodyDataStream,
    buffer: String,
}

impl SseEvents {
    fn new(response: axum::response::Response) -> Self {
        Self {
            body: response.into_body().into_data_stream(),
            buffer: String::new(),
        }
    }

    /// Next named event as `(event, data)`. Keep-alive comments are skipped.
    async fn next(&mut self) -> (String, String) {
        loop {
            if let Some(end) = self.buffer.find("\n\n") {
                let frame: String = self.buffer.drain(..end + 2).collect();
                let mut event = String::new();
                let mut data = String::new();
                for line in frame.lines() {
                    if let Some(v) = line.strip_prefix("event:") {
                        event = v.trim().to_string();
                    } else if let Some(v) = line.strip_prefix("data:") {
                        data.push_str(v.trim());
                    }
                }
                if event.is_empty() && data.is_empty() {
                    continue;
                }
                return (event, data);
            }
            let chunk = tokio::time::timeout(Duration::from_secs(5), self.body.next())
                .await
                .expect("timed out waiting for SSE event")
                .expect("SSE stream ended")
                .unwrap();
            self.buffer.push_str(std::str::from_utf8(&chunk).unwrap());
        }
    }
}

#[tokio::test]
async fn test_sse_endpoint_then_message_event() {
    let state = state();
    let app = sse_router(Arc::clone(&state));

    let response = app
        .clone()
        .oneshot(Request::get("/sse").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/event-stream"
    );
    let mut events = SseEvents::new(response);

    let (event, endpoint) = events.next().await;
    assert_eq!(event, "endpoint");
    assert!(endpoint.starts_with("/message?sessionId="));

    let call = json!({
        "jsonrpc": "2.0", "id": 7, "method": "tools/call",
        "params": { "name": "greet", "arguments": { "name": "Ada" } }
    });
    let response = app.oneshot(post(&endpoint, call.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let (event, data) = events.next().await;
    assert_eq!(event, "message");
    let reply: Value = serde_json::from_str(&data).unwrap();
    assert_eq!(reply["id"], 7);
    assert_eq!(reply["result"]["content"][0]["text"], "Hello, Ada!");
    assert_eq!(state.sessions.stats().connected, 1);
}

#[tokio::test]
async fn test_stdio_loop() {
    let (client, server) = tokio::io::duplex(64 * 1024);
    let (server_read, server_write) = tokio::io::split(server);
    let task = tokio::spawn(serve_stdio(state(), server_read, server_write));

    let (client_read, mut client_write) = tokio::io::split(client);
    let mut replies = BufReader::new(client_read).lines();

    client_write
        .write_all(b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"list_tools\",\"params\":{}}\n")
        .await
        .unwrap();
    let reply: Value = serde_json::from_str(&replies.next_line().await.unwrap().unwrap()).unwrap();
    assert_eq!(reply, json!({ "jsonrpc": "2.0", "id": 1, "result": ["greet"] }));

    // Notifications are silent; the next line belongs to the parse error.
    client_write
        .write_all(b"{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\nnot json\n")
        .await
        .unwrap();
    let reply: Value = serde_json::from_str(&replies.next_line().await.unwrap().unwrap()).unwrap();
    assert_eq!(reply["id"], Value::Null);
    assert_eq!(reply["error"]["code"], -32700);

    client_write
        .write_all(b"{\"jsonrpc\":\"2.0\",\"id\":\"x\",\"method\":\"invoke\",\"params\":{\"tool\":\"greet\",\"args\":{\"name\":\"Lin\"}}}\n")
        .await
        .unwrap();
    let reply: Value = serde_json::from_str(&replies.next_line().await.unwrap().unwrap()).unwrap();
    assert_eq!(reply["id"], "x");
    assert_eq!(reply["result"], "Hello, Lin!");

    client_write.shutdown().await.unwrap();
    task.await.unwrap().unwrap();
}
