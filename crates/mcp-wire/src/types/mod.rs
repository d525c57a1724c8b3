//! MCP Protocol Types
//!
//! - `jsonrpc` - JSON-RPC 2.0 envelopes (incoming messages, outgoing replies)
//! - `error` - protocol error data and the tool-level error kinds
//! - `protocol` - initialize handshake and capabilities
//! - `tool` - tool definitions, call params and results

pub mod error;
pub mod jsonrpc;
pub mod protocol;
pub mod tool;
