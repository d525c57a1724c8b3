//! MCP handler over the adapter registry.

use fakegen::Faker;
use mcp_wire::{Handler, Implementation, Tool, ToolError, ToolSchema};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::adapter::{AdapterError, CallArgs};
use crate::registry::{register_all, ToolRegistry};

pub const SERVER_NAME: &str = "fake.py MCP Server";
pub const DOCS_URL: &str = "https://github.com/barseghyanartur/fake.py";
pub const SERVER_INFO_TOOL: &str = "server_info";

/// Serves every generated adapter plus the `server_info` tool.
pub struct FakerHandler {
    registry: ToolRegistry,
}

impl FakerHandler {
    /// Register every provider in the generator registry.
    pub fn new(faker: Faker) -> Self {
        let faker = Arc::new(faker);
        let mut registry = ToolRegistry::new();
        let count = register_all(&mut registry, fakegen::registry(), &faker);
        tracing::info!(
            tools = count,
            file_root = %faker.file_root().display(),
            "Registered fake.py tools"
        );
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Summary of the server and its generated tools, sorted by name.
    pub fn server_summary(&self) -> Value {
        let mut tools: Vec<&str> = self.registry.names().collect();
        tools.sort_unstable();
        json!({
            "server": SERVER_NAME,
            "tools": tools,
            "docs": DOCS_URL,
        })
    }

    fn server_info_tool() -> Tool {
        Tool::new(
            SERVER_INFO_TOOL,
            "Get information about this MCP server and available fake.py tools.",
        )
        .with_input_schema(ToolSchema::with_properties(serde_json::Map::new()))
    }
}

impl Handler for FakerHandler {
    fn tools(&self) -> Vec<Tool> {
        let mut tools: Vec<Tool> = self
            .registry
            .adapters()
            .iter()
            .map(|adapter| adapter.tool())
            .collect();
        tools.push(Self::server_info_tool());
        tools
    }

    fn tool_names(&self) -> Vec<String> {
        self.registry
            .names()
            .chain(std::iter::once(SERVER_INFO_TOOL))
            .map(str::to_string)
            .collect()
    }

    fn invoke(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        if name == SERVER_INFO_TOOL {
            return Ok(self.server_summary());
        }

        let adapter = self
            .registry
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        adapter
            .invoke(&CallArgs::from_json(arguments))
            .map_err(|e| match e {
                AdapterError::MissingArgument { .. } => ToolError::InvalidArguments(e.to_string()),
                AdapterError::Execution { .. } => ToolError::Failed(e.to_string()),
            })
    }

    fn server_info(&self) -> Implementation {
        Implementation::new(SERVER_NAME, env!("CARGO_PKG_VERSION"))
    }
}
