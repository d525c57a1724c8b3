//! Result serialisation.
//!
//! The rendering of a provider's return value is chosen by the provider's
//! name, never by what the value turns out to be. A value that does not fit
//! its name's rule goes out in its natural JSON form.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{NaiveDateTime, Timelike};
use fakegen::NativeValue;
use serde_json::Value;

use crate::classify::is_binary_format;

/// How one tool's result is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultPolicy {
    /// Raw bytes as standard, padded base64.
    Base64,
    /// Canonical hyphenated lowercase.
    Uuid,
    /// `YYYY-MM-DD`
    Date,
    /// `YYYY-MM-DDTHH:MM:SS[.ffffff]`
    DateTime,
    /// Two-element array, order kept.
    Pair,
    Verbatim,
}

impl ResultPolicy {
    pub fn for_name(name: &str) -> Self {
        if is_binary_format(name) {
            return ResultPolicy::Base64;
        }
        match name {
            "uuid" => ResultPolicy::Uuid,
            "date" => ResultPolicy::Date,
            "date_time" => ResultPolicy::DateTime,
            "latitude_longitude" => ResultPolicy::Pair,
            _ => ResultPolicy::Verbatim,
        }
    }

    pub fn apply(self, value: NativeValue) -> Value {
        match (self, value) {
            (ResultPolicy::Base64, NativeValue::Bytes(bytes)) => {
                Value::String(STANDARD.encode(bytes))
            }
            (ResultPolicy::Uuid, NativeValue::Uuid(id)) => {
                Value::String(id.hyphenated().to_string())
            }
            (ResultPolicy::Date | ResultPolicy::DateTime, NativeValue::Date(date)) => {
                Value::String(date.format("%Y-%m-%d").to_string())
            }
            (ResultPolicy::Date | ResultPolicy::DateTime, NativeValue::DateTime(dt)) => {
                Value::String(isoformat(&dt))
            }
            (ResultPolicy::Pair, NativeValue::Pair(a, b)) => Value::Array(vec![real(a), real(b)]),
            (_, other) => natural(other),
        }
    }
}

/// Render a provider's result for the wire. Never fails.
pub fn serialise(name: &str, value: NativeValue) -> Value {
    ResultPolicy::for_name(name).apply(value)
}

/// Seconds precision, with microseconds only when there are any.
fn isoformat(dt: &NaiveDateTime) -> String {
    let base = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
    match dt.nanosecond() / 1_000 {
        0 => base,
        micros => format!("{}.{:06}", base, micros),
    }
}

fn real(x: f64) -> Value {
    serde_json::Number::from_f64(x)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn natural(value: NativeValue) -> Value {
    serde_json::to_value(&value).unwrap_or(Value::Null)
}
