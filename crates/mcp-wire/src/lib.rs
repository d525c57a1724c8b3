//! mcp-wire - MCP (Model Context Protocol) server plumbing
//!
//! Just enough of MCP 2025-06-18 to expose a flat set of tools:
//!
//! - **Types**: JSON-RPC 2.0 envelopes, the initialize handshake, tools
//! - **Dispatch**: `initialize`, `ping`, `tools/list`, `tools/call`, plus the
//!   legacy `list_tools` and `invoke` methods
//! - **Transports**: newline-delimited stdio, Streamable HTTP, SSE, and a
//!   plain REST surface (`/invoke`, `/tools`, `/health`)
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_wire::{Handler, Implementation, Tool, ToolError};
//! use serde_json::Value;
//!
//! struct Echo;
//!
//! impl Handler for Echo {
//!     fn tools(&self) -> Vec<Tool> {
//!         vec![Tool::new("echo", "Echo the arguments back")]
//!     }
//!
//!     fn invoke(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
//!         match name {
//!             "echo" => Ok(arguments),
//!             other => Err(ToolError::UnknownTool(other.to_string())),
//!         }
//!     }
//!
//!     fn server_info(&self) -> Implementation {
//!         Implementation::new("echo", "0.1.0")
//!     }
//! }
//!
//! let state = std::sync::Arc::new(mcp_wire::McpState::new(Echo));
//! let app = mcp_wire::http_router(state);
//! ```

pub mod protocol;
pub mod session;
pub mod transport;
pub mod types;

pub use types::error::{ErrorData, ToolError};
pub use types::jsonrpc::{JsonRpcMessage, JsonRpcReply, RequestId};
pub use types::protocol::{Implementation, InitializeResult, ServerCapabilities, PROTOCOL_VERSION};
pub use types::tool::{CallToolResult, Content, ListToolsResult, Tool, ToolSchema};

pub use session::{spawn_cleanup_task, InMemorySessionStore, Session, SessionStats, SessionStore};

pub use protocol::{dispatch, handle_message, handle_text, Handler};

pub use transport::{http_router, rest_router, serve_stdio, sse_router, McpState, STDIO_SESSION};
