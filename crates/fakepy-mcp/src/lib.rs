//! fakepy-mcp - every fake data provider as an MCP tool
//!
//! Startup walks the provider registry once and builds one [`ToolAdapter`]
//! per public provider. Each adapter exposes only the parameters a JSON
//! client can fill, binds request arguments against them, and renders the
//! provider's result as JSON (bytes as base64, dates as ISO strings). The
//! adapters sit behind [`FakerHandler`], which any `mcp-wire` transport can
//! serve.

pub mod adapter;
pub mod classify;
pub mod config;
pub mod handler;
pub mod params;
pub mod registry;
pub mod serialise;
pub mod serve;
pub mod telemetry;

pub use adapter::{build_adapter, AdapterError, CallArgs, ToolAdapter};
pub use classify::{infer_return_type, WireType, BINARY_FORMATS};
pub use config::{Config, ConfigError};
pub use handler::{FakerHandler, DOCS_URL, SERVER_INFO_TOOL, SERVER_NAME};
pub use params::filter_params;
pub use registry::{register_all, ToolRegistry};
pub use serialise::{serialise, ResultPolicy};
pub use serve::{run, Mode, ServeConfig};
