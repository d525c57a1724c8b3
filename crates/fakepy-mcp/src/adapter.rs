//! Tool adapters.
//!
//! A [`ToolAdapter`] wraps one provider so a generic dispatcher can call it
//! with loosely shaped JSON arguments. It owns the admissible parameter list
//! (see [`filter_params`]), binds request arguments against it, calls the
//! provider with exactly the bound keywords, and serialises the result.

use fakegen::{Faker, Kwargs, Member, ParamSpec, ProviderSpec, RegistryEntry};
use mcp_wire::{Tool, ToolSchema};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use thiserror::Error;

use crate::classify::{infer_return_type, scalar_type, WireType};
use crate::params::filter_params;
use crate::serialise::serialise;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdapterError {
    /// Raised before the provider runs.
    #[error("Missing required argument: {name}")]
    MissingArgument { name: String },

    #[error("fake.py error in {tool}(): {message}")]
    Execution { tool: String, message: String },
}

/// Request arguments, split by how they were passed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    pub positional: Vec<Value>,
    pub named: Map<String, Value>,
}

impl CallArgs {
    pub fn none() -> Self {
        Self::default()
    }

    /// Arrays are positional, objects are named, null is nothing. Any other
    /// scalar counts as a single positional argument.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Self::none(),
            Value::Array(positional) => Self {
                positional,
                named: Map::new(),
            },
            Value::Object(named) => Self {
                positional: Vec::new(),
                named,
            },
            scalar => Self {
                positional: vec![scalar],
                named: Map::new(),
            },
        }
    }
}

impl From<Value> for CallArgs {
    fn from(value: Value) -> Self {
        Self::from_json(value)
    }
}

/// One provider, ready to be called over the wire. Immutable once built.
#[derive(Debug, Clone)]
pub struct ToolAdapter {
    name: &'static str,
    params: Vec<ParamSpec>,
    returns: WireType,
    description: String,
    spec: ProviderSpec,
    faker: Arc<Faker>,
}

impl ToolAdapter {
    pub fn new(spec: ProviderSpec, faker: Arc<Faker>) -> Self {
        let description = spec
            .doc
            .map(str::to_string)
            .unwrap_or_else(|| format!("Fake.py: {}()", spec.name));
        Self {
            name: spec.name,
            params: filter_params(spec.params),
            returns: infer_return_type(spec.name),
            description,
            spec,
            faker,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Admissible parameters, in declared order.
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn returns(&self) -> WireType {
        self.returns
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Resolve each admissible parameter: named argument, then the
    /// positional argument at its index, then its default.
    ///
    /// Named arguments that match no admissible parameter are ignored. An
    /// explicit `null` counts as supplied.
    pub fn bind(&self, args: &CallArgs) -> Result<Kwargs, AdapterError> {
        let mut kwargs = Kwargs::new();
        for (index, param) in self.params.iter().enumerate() {
            let value = if let Some(value) = args.named.get(param.name) {
                value.clone()
            } else if let Some(value) = args.positional.get(index) {
                value.clone()
            } else if let Some(default) = param.default {
                default.to_json()
            } else {
                return Err(AdapterError::MissingArgument {
                    name: param.name.to_string(),
                });
            };
            kwargs.insert(param.name.to_string(), value);
        }
        Ok(kwargs)
    }

    /// Bind, call, serialise.
    pub fn invoke(&self, args: &CallArgs) -> Result<Value, AdapterError> {
        let kwargs = self.bind(args)?;

        match self.spec.call(&self.faker, &kwargs) {
            Ok(raw) => Ok(serialise(self.name, raw)),
            Err(e) => {
                tracing::error!(tool = self.name, "Error in {}(): {}", self.name, e);
                Err(AdapterError::Execution {
                    tool: self.name.to_string(),
                    message: e.to_string(),
                })
            }
        }
    }

    /// JSON Schema object for the admissible parameters.
    pub fn input_schema(&self) -> ToolSchema {
        let mut properties = Map::new();
        for param in &self.params {
            properties.insert(param.name.to_string(), param_schema(param));
        }
        let required = self
            .params
            .iter()
            .filter(|param| param.is_required())
            .map(|param| param.name.to_string())
            .collect();
        ToolSchema::with_properties(properties).with_required(required)
    }

    /// The MCP tool listing entry. The return tag rides in `_meta`.
    pub fn tool(&self) -> Tool {
        Tool::new(self.name, self.description.clone())
            .with_input_schema(self.input_schema())
            .with_meta(json!({ "returns": self.returns.json_schema() }))
    }
}

fn param_schema(param: &ParamSpec) -> Value {
    let mut schema = Map::new();
    if let Some((wire, nullable)) = param.annotation.as_ref().and_then(scalar_type) {
        if let Some(keyword) = wire.schema_keyword() {
            let ty = if nullable {
                json!([keyword, "null"])
            } else {
                json!(keyword)
            };
            schema.insert("type".to_string(), ty);
        }
    }
    if let Some(default) = param.default {
        schema.insert("default".to_string(), default.to_json());
    }
    Value::Object(schema)
}

/// Build the adapter for one registry entry. Private names and plain values
/// are skipped.
pub fn build_adapter(entry: &RegistryEntry, faker: &Arc<Faker>) -> Option<ToolAdapter> {
    if entry.name.starts_with('_') {
        return None;
    }
    match entry.member {
        Member::Provider(spec) => Some(ToolAdapter::new(spec, Arc::clone(faker))),
        Member::Value(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakegen::{FakeError, Literal, NativeValue, TypeExpr};
    use pretty_assertions::assert_eq;

    fn echo(_: &Faker, kwargs: &Kwargs) -> Result<NativeValue, FakeError> {
        Ok(NativeValue::Str(Value::Object(kwargs.clone()).to_string()))
    }

    fn boom(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
        Err(FakeError::UnknownProvider("kaboom".to_string()))
    }

    const RANGE: &[ParamSpec] = &[
        ParamSpec::required("max_value", TypeExpr::Int),
        ParamSpec::optional("min_value", TypeExpr::Int, Literal::Int(0)),
        ParamSpec::var_kwargs("kwargs"),
    ];

    fn adapter(
        name: &'static str,
        params: &'static [ParamSpec],
        func: fakegen::ProviderFn,
    ) -> ToolAdapter {
        let spec = ProviderSpec {
            name,
            params,
            doc: None,
            func,
        };
        ToolAdapter::new(spec, Arc::new(Faker::new()))
    }

    fn bound(adapter: &ToolAdapter, args: Value) -> Value {
        Value::Object(adapter.bind(&CallArgs::from_json(args)).unwrap())
    }

    #[test]
    fn test_default_fills_missing_optional() {
        let range = adapter("range", RANGE, echo);
        assert_eq!(
            bound(&range, json!({ "max_value": 10 })),
            json!({ "max_value": 10, "min_value": 0 })
        );
    }

    #[test]
    fn test_missing_required_names_parameter() {
        let range = adapter("range", RANGE, echo);
        let err = range.bind(&CallArgs::none()).unwrap_err();
        assert_eq!(
            err,
            AdapterError::MissingArgument {
                name: "max_value".to_string()
            }
        );
        assert!(err.to_string().to_lowercase().contains("missing"));
    }

    #[test]
    fn test_positional_binding_and_named_precedence() {
        let range = adapter("range", RANGE, echo);
        assert_eq!(
            bound(&range, json!([10, 3])),
            json!({ "max_value": 10, "min_value": 3 })
        );
        // The named value wins over the positional one at the same index.
        let args = CallArgs {
            positional: vec![json!(10), json!(3)],
            named: json!({ "min_value": 5 }).as_object().cloned().unwrap(),
        };
        assert_eq!(
            Value::Object(range.bind(&args).unwrap()),
            json!({ "max_value": 10, "min_value": 5 })
        );
    }

    #[test]
    fn test_unknown_named_arguments_ignored() {
        let range = adapter("range", RANGE, echo);
        assert_eq!(
            bound(&range, json!({ "max_value": 1, "colour": "red", "kwargs": {} })),
            json!({ "max_value": 1, "min_value": 0 })
        );
    }

    #[test]
    fn test_explicit_null_is_supplied() {
        let range = adapter("range", RANGE, echo);
        assert_eq!(
            bound(&range, json!({ "max_value": 1, "min_value": null })),
            json!({ "max_value": 1, "min_value": null })
        );
    }

    #[test]
    fn test_invoke_passes_exactly_bound_keywords() {
        let range = adapter("range", RANGE, echo);
        let result = range.invoke(&CallArgs::from_json(json!([7]))).unwrap();
        let seen: Value = serde_json::from_str(result.as_str().unwrap()).unwrap();
        assert_eq!(seen, json!({ "max_value": 7, "min_value": 0 }));
    }

    #[test]
    fn test_execution_failure_is_wrapped() {
        let broken = adapter("broken", &[], boom);
        let err = broken.invoke(&CallArgs::none()).unwrap_err();
        match err {
            AdapterError::Execution { tool, message } => {
                assert_eq!(tool, "broken");
                assert_eq!(message, "unknown provider: kaboom");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_zero_param_adapter_ignores_arguments() {
        let plain = adapter("plain", &[], echo);
        assert_eq!(
            plain.invoke(&CallArgs::from_json(json!({ "x": 1 }))).unwrap(),
            json!("{}")
        );
    }

    #[test]
    fn test_description_falls_back_to_name() {
        assert_eq!(adapter("plain", &[], echo).description(), "Fake.py: plain()");
    }

    #[test]
    fn test_input_schema() {
        let range = adapter("range", RANGE, echo);
        let schema = serde_json::to_value(range.input_schema()).unwrap();
        assert_eq!(
            schema,
            json!({
                "type": "object",
                "properties": {
                    "max_value": { "type": "integer" },
                    "min_value": { "type": "integer", "default": 0 }
                },
                "required": ["max_value"]
            })
        );
    }

    #[test]
    fn test_nullable_param_schema() {
        let param = ParamSpec::optional("domain", TypeExpr::OPTIONAL_STR, Literal::None);
        assert_eq!(
            param_schema(&param),
            json!({ "type": ["string", "null"], "default": null })
        );
    }

    #[test]
    fn test_build_adapter_skips() {
        let faker = Arc::new(Faker::new());
        let hidden = RegistryEntry {
            name: "_private",
            member: Member::Provider(ProviderSpec {
                name: "_private",
                params: &[],
                doc: None,
                func: echo,
            }),
        };
        assert!(build_adapter(&hidden, &faker).is_none());

        let locale = RegistryEntry {
            name: "locale",
            member: Member::Value(Literal::Str("en_US")),
        };
        assert!(build_adapter(&locale, &faker).is_none());
    }
}
