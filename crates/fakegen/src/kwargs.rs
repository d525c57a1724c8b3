//! Keyword arguments handed to providers.
//!
//! Arguments arrive as JSON values. Missing keys and explicit `null` both read
//! as `None`; a value of the wrong shape is an [`FakeError::InvalidArgument`].

use serde_json::{Map, Value};

use crate::FakeError;

/// Resolved keyword arguments for one provider call.
pub type Kwargs = Map<String, Value>;

fn invalid(param: &str, expected: &'static str, got: &Value) -> FakeError {
    FakeError::InvalidArgument {
        param: param.to_string(),
        expected,
        got: got.to_string(),
    }
}

fn present<'a>(kwargs: &'a Kwargs, name: &str) -> Option<&'a Value> {
    kwargs.get(name).filter(|v| !v.is_null())
}

pub fn int(kwargs: &Kwargs, name: &str) -> Result<Option<i64>, FakeError> {
    match present(kwargs, name) {
        None => Ok(None),
        Some(v) => v.as_i64().map(Some).ok_or_else(|| invalid(name, "int", v)),
    }
}

pub fn float(kwargs: &Kwargs, name: &str) -> Result<Option<f64>, FakeError> {
    match present(kwargs, name) {
        None => Ok(None),
        Some(v) => v.as_f64().map(Some).ok_or_else(|| invalid(name, "float", v)),
    }
}

pub fn boolean(kwargs: &Kwargs, name: &str) -> Result<Option<bool>, FakeError> {
    match present(kwargs, name) {
        None => Ok(None),
        Some(v) => v.as_bool().map(Some).ok_or_else(|| invalid(name, "bool", v)),
    }
}

pub fn string<'a>(kwargs: &'a Kwargs, name: &str) -> Result<Option<&'a str>, FakeError> {
    match present(kwargs, name) {
        None => Ok(None),
        Some(v) => v.as_str().map(Some).ok_or_else(|| invalid(name, "str", v)),
    }
}

/// Largest list length a provider will build.
pub const MAX_COUNT: usize = 10_000;

/// Largest generated text, in characters.
pub const MAX_CHARS: usize = 1_000_000;

/// A count argument: a non-negative int no greater than [`MAX_COUNT`].
pub fn count(kwargs: &Kwargs, name: &'static str, default: usize) -> Result<usize, FakeError> {
    bounded(kwargs, name, default, MAX_COUNT)
}

/// A character count: a non-negative int no greater than [`MAX_CHARS`].
pub fn char_count(
    kwargs: &Kwargs,
    name: &'static str,
    default: usize,
) -> Result<usize, FakeError> {
    bounded(kwargs, name, default, MAX_CHARS)
}

fn bounded(
    kwargs: &Kwargs,
    name: &'static str,
    default: usize,
    max: usize,
) -> Result<usize, FakeError> {
    match int(kwargs, name)? {
        None => Ok(default),
        Some(n) if n < 0 => Err(FakeError::InvalidArgument {
            param: name.to_string(),
            expected: "non-negative int",
            got: n.to_string(),
        }),
        Some(n) => match usize::try_from(n) {
            Ok(n) if n <= max => Ok(n),
            _ => Err(FakeError::Range {
                what: name,
                low: n.to_string(),
                high: max.to_string(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kw(value: Value) -> Kwargs {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_missing_and_null_read_as_none() {
        let args = kw(json!({ "a": null }));
        assert_eq!(int(&args, "a").unwrap(), None);
        assert_eq!(int(&args, "b").unwrap(), None);
    }

    #[test]
    fn test_float_accepts_integers() {
        let args = kw(json!({ "x": 3 }));
        assert_eq!(float(&args, "x").unwrap(), Some(3.0));
    }

    #[test]
    fn test_wrong_shape_is_invalid_argument() {
        let args = kw(json!({ "nb": "five" }));
        let err = int(&args, "nb").unwrap_err();
        assert!(matches!(err, FakeError::InvalidArgument { .. }));
        assert!(err.to_string().contains("nb"));
    }

    #[test]
    fn test_negative_count_rejected() {
        let args = kw(json!({ "nb": -1 }));
        assert!(count(&args, "nb", 5).is_err());
        assert_eq!(count(&Kwargs::new(), "nb", 5).unwrap(), 5);
    }

    #[test]
    fn test_oversized_counts_rejected() {
        let args = kw(json!({ "nb": 1_000_000_000_000i64, "nb_chars": 1_000_000_000_000i64 }));
        assert!(matches!(
            count(&args, "nb", 5).unwrap_err(),
            FakeError::Range { what: "nb", .. }
        ));
        assert!(matches!(
            char_count(&args, "nb_chars", 200).unwrap_err(),
            FakeError::Range { what: "nb_chars", .. }
        ));

        let at_limit = kw(json!({ "nb": MAX_COUNT, "nb_chars": MAX_CHARS }));
        assert_eq!(count(&at_limit, "nb", 5).unwrap(), MAX_COUNT);
        assert_eq!(char_count(&at_limit, "nb_chars", 200).unwrap(), MAX_CHARS);
    }
}
