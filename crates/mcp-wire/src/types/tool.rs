//! Tool Types
//!
//! Tool definitions, `tools/call` params, and call results.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A tool definition as listed by `tools/list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub input_schema: ToolSchema,

    /// Free-form metadata, `_meta` on the wire.
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl Tool {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            input_schema: ToolSchema::empty(),
            meta: None,
        }
    }

    pub fn with_input_schema(mut self, schema: ToolSchema) -> Self {
        self.input_schema = schema;
        self
    }

    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// Object schema for tool input or output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolSchema {
    /// Always "object".
    #[serde(rename = "type")]
    pub schema_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl ToolSchema {
    pub fn empty() -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: None,
            required: None,
        }
    }

    pub fn with_properties(properties: Map<String, Value>) -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: Some(properties),
            required: None,
        }
    }

    /// Set the required names; an empty list is left off the wire.
    pub fn with_required(mut self, fields: Vec<String>) -> Self {
        self.required = (!fields.is_empty()).then_some(fields);
        self
    }
}

impl Default for ToolSchema {
    fn default() -> Self {
        Self::empty()
    }
}

/// A content block in a tool result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    Text { text: String },
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text { text: text.into() }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text { text } => Some(text),
        }
    }
}

/// Params of `tools/call`. `arguments` is usually an object; an array is
/// accepted as positional arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolParams {
    pub name: String,

    #[serde(default)]
    pub arguments: Option<Value>,
}

/// Params of the legacy `invoke` method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeParams {
    pub tool: String,

    #[serde(default)]
    pub args: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    pub content: Vec<Content>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<Value>,
}

impl CallToolResult {
    /// Wrap a tool's JSON result: strings go out verbatim as text, anything
    /// else as compact JSON. The value itself rides along as
    /// `structuredContent.result`.
    pub fn from_value(value: Value) -> Self {
        let text = match &value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Self {
            content: vec![Content::text(text)],
            is_error: false,
            structured_content: Some(serde_json::json!({ "result": value })),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![Content::text(message)],
            is_error: true,
            structured_content: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListToolsResult {
    pub tools: Vec<Tool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl ListToolsResult {
    pub fn all(tools: Vec<Tool>) -> Self {
        Self {
            tools,
            next_cursor: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_json() {
        let tool = Tool::new("hello", "Say hello");
        let json = serde_json::to_value(&tool).unwrap();
        assert_eq!(json["name"], "hello");
        assert_eq!(json["description"], "Say hello");
        assert_eq!(json["inputSchema"], json!({ "type": "object" }));
        assert!(json.get("_meta").is_none());
    }

    #[test]
    fn test_tool_meta_is_underscored() {
        let tool = Tool::new("pyint", "Random int")
            .with_meta(json!({ "returns": { "type": "integer" } }));
        let json = serde_json::to_value(&tool).unwrap();
        assert_eq!(json["_meta"]["returns"]["type"], "integer");
    }

    #[test]
    fn test_empty_required_is_omitted() {
        let schema = ToolSchema::with_properties(Map::new()).with_required(vec![]);
        let json = serde_json::to_value(&schema).unwrap();
        assert!(json.get("required").is_none());
    }

    #[test]
    fn test_string_result_is_plain_text() {
        let result = CallToolResult::from_value(json!("Ada Lovelace"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["content"][0], json!({ "type": "text", "text": "Ada Lovelace" }));
        assert_eq!(json["structuredContent"]["result"], "Ada Lovelace");
        assert!(json.get("isError").is_none());
    }

    #[test]
    fn test_list_result_is_json_text() {
        let result = CallToolResult::from_value(json!([1.5, 2.5]));
        assert_eq!(result.content[0].as_text(), Some("[1.5,2.5]"));
    }

    #[test]
    fn test_error_result() {
        let json = serde_json::to_value(CallToolResult::error("boom")).unwrap();
        assert_eq!(json["isError"], true);
        assert_eq!(json["content"][0]["text"], "boom");
    }

    #[test]
    fn test_call_params_accept_arrays() {
        let params: CallToolParams =
            serde_json::from_value(json!({ "name": "pyint", "arguments": [1, 5] })).unwrap();
        assert_eq!(params.arguments, Some(json!([1, 5])));
    }
}
