//! Type classification.
//!
//! Two questions get answered here: which declared parameter types can cross
//! the JSON-RPC boundary, and what JSON type a provider hands back. The
//! second is decided from the provider's name alone and only feeds
//! documentation.

use fakegen::TypeExpr;
use serde_json::{json, Value};
use std::fmt;

/// JSON-compatible type tag for schemas and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    Integer,
    Real,
    String,
    Boolean,
    StringList,
    RealList,
}

impl WireType {
    pub fn as_str(self) -> &'static str {
        match self {
            WireType::Integer => "integer",
            WireType::Real => "real",
            WireType::String => "string",
            WireType::Boolean => "boolean",
            WireType::StringList => "list-of-string",
            WireType::RealList => "list-of-real",
        }
    }

    /// JSON Schema fragment for a value of this type.
    pub fn json_schema(self) -> Value {
        match self {
            WireType::Integer => json!({ "type": "integer" }),
            WireType::Real => json!({ "type": "number" }),
            WireType::String => json!({ "type": "string" }),
            WireType::Boolean => json!({ "type": "boolean" }),
            WireType::StringList => json!({ "type": "array", "items": { "type": "string" } }),
            WireType::RealList => json!({ "type": "array", "items": { "type": "number" } }),
        }
    }

    /// Schema keyword for a scalar, `None` for the list tags.
    pub fn schema_keyword(self) -> Option<&'static str> {
        match self {
            WireType::Integer => Some("integer"),
            WireType::Real => Some("number"),
            WireType::String => Some("string"),
            WireType::Boolean => Some("boolean"),
            WireType::StringList | WireType::RealList => None,
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Providers that return raw document bytes. Sorted.
pub const BINARY_FORMATS: [&str; 16] = [
    "bmp", "docx", "eml", "epub", "gif", "jpg", "odt", "pdf", "png", "ppm", "rtf", "svg", "tar",
    "tif", "wav", "zip",
];

const STRING_LISTS: [&str; 9] = [
    "first_names",
    "last_names",
    "names",
    "paragraphs",
    "sentences",
    "slugs",
    "texts",
    "usernames",
    "words",
];

pub fn is_binary_format(name: &str) -> bool {
    BINARY_FORMATS.binary_search(&name).is_ok()
}

/// Infer the JSON type a provider returns. First matching rule wins.
pub fn infer_return_type(name: &str) -> WireType {
    if is_binary_format(name) {
        // base64 text
        return WireType::String;
    }
    if name.ends_with("_file") {
        // filesystem path
        return WireType::String;
    }
    if name == "latitude_longitude" {
        return WireType::RealList;
    }
    if STRING_LISTS.binary_search(&name).is_ok() {
        return WireType::StringList;
    }
    match name {
        "uuid" | "date" | "date_time" => WireType::String,
        "latitude" | "longitude" => WireType::Real,
        "pybool" => WireType::Boolean,
        "pyint" | "year" => WireType::Integer,
        _ => WireType::String,
    }
}

fn simple(ty: &TypeExpr) -> Option<WireType> {
    match ty {
        TypeExpr::Int => Some(WireType::Integer),
        TypeExpr::Str => Some(WireType::String),
        TypeExpr::Float => Some(WireType::Real),
        TypeExpr::Bool => Some(WireType::Boolean),
        _ => None,
    }
}

/// Scalar tag of a wire-safe annotation, plus whether it admits null.
pub fn scalar_type(ty: &TypeExpr) -> Option<(WireType, bool)> {
    match ty {
        TypeExpr::Union([a, b]) => match (a, b) {
            (TypeExpr::NoneType, other) | (other, TypeExpr::NoneType) => {
                simple(other).map(|wire| (wire, true))
            }
            _ => None,
        },
        other => simple(other).map(|wire| (wire, false)),
    }
}

/// True for int, str, float and bool, and for `Optional` of exactly one of
/// those. Everything else stays in-process.
pub fn is_wire_safe(ty: &TypeExpr) -> bool {
    scalar_type(ty).is_some()
}
