//! Native provider return values.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use uuid::Uuid;

/// The raw value a provider returns, before any wire-level conversion.
///
/// Serializing a `NativeValue` gives its natural JSON form: bytes become an
/// array of numbers, dates use chrono's ISO layout, a pair becomes a
/// two-element array. Callers that want a specific rendering (base64 for
/// documents, for instance) convert explicitly instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NativeValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Uuid(Uuid),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Pair(f64, f64),
    StrList(Vec<String>),
}

impl NativeValue {
    /// Short type name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            NativeValue::None => "none",
            NativeValue::Bool(_) => "bool",
            NativeValue::Int(_) => "int",
            NativeValue::Float(_) => "float",
            NativeValue::Str(_) => "str",
            NativeValue::Bytes(_) => "bytes",
            NativeValue::Uuid(_) => "uuid",
            NativeValue::Date(_) => "date",
            NativeValue::DateTime(_) => "datetime",
            NativeValue::Pair(_, _) => "tuple",
            NativeValue::StrList(_) => "list[str]",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            NativeValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            NativeValue::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl From<String> for NativeValue {
    fn from(s: String) -> Self {
        NativeValue::Str(s)
    }
}

impl From<&str> for NativeValue {
    fn from(s: &str) -> Self {
        NativeValue::Str(s.to_string())
    }
}

impl From<Vec<String>> for NativeValue {
    fn from(v: Vec<String>) -> Self {
        NativeValue::StrList(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_natural_json_forms() {
        assert_eq!(serde_json::to_value(NativeValue::None).unwrap(), json!(null));
        assert_eq!(serde_json::to_value(NativeValue::Int(7)).unwrap(), json!(7));
        assert_eq!(
            serde_json::to_value(NativeValue::Pair(1.5, -2.0)).unwrap(),
            json!([1.5, -2.0])
        );
        assert_eq!(
            serde_json::to_value(NativeValue::Bytes(vec![1, 2])).unwrap(),
            json!([1, 2])
        );
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(
            serde_json::to_value(NativeValue::Date(date)).unwrap(),
            json!("2024-01-02")
        );
    }
}
