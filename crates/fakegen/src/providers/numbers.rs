//! Numeric and boolean providers.

use rand::Rng;

use crate::kwargs::{self, Kwargs};
use crate::{FakeError, Faker, NativeValue};

fn empty_range(what: &'static str, low: impl ToString, high: impl ToString) -> FakeError {
    FakeError::Range {
        what,
        low: low.to_string(),
        high: high.to_string(),
    }
}

pub fn pyint(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let min_value = kwargs::int(kw, "min_value")?.unwrap_or(0);
    let max_value = kwargs::int(kw, "max_value")?.unwrap_or(9999);
    if min_value > max_value {
        return Err(empty_range("pyint", min_value, max_value));
    }
    Ok(NativeValue::Int(
        rand::thread_rng().gen_range(min_value..=max_value),
    ))
}

pub fn pyfloat(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let min_value = kwargs::float(kw, "min_value")?.unwrap_or(0.0);
    let max_value = kwargs::float(kw, "max_value")?.unwrap_or(10.0);
    // A span too wide for f64 cannot be sampled uniformly.
    if min_value > max_value || !(max_value - min_value).is_finite() {
        return Err(empty_range("pyfloat", min_value, max_value));
    }
    Ok(NativeValue::Float(
        rand::thread_rng().gen_range(min_value..=max_value),
    ))
}

/// Decimals are returned in their exact string form.
pub fn pydecimal(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let left_digits = kwargs::count(kw, "left_digits", 5)?.clamp(1, 18) as u32;
    let right_digits = kwargs::count(kw, "right_digits", 2)?.min(18);
    let positive = kwargs::boolean(kw, "positive")?.unwrap_or(true);

    let mut rng = rand::thread_rng();
    let whole = rng.gen_range(0..10u64.pow(left_digits));
    let fraction: String = (0..right_digits)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();
    let sign = if !positive && rng.gen_bool(0.5) { "-" } else { "" };

    let text = if fraction.is_empty() {
        format!("{}{}", sign, whole)
    } else {
        format!("{}{}.{}", sign, whole, fraction)
    };
    Ok(NativeValue::Str(text))
}

pub fn pybool(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(NativeValue::Bool(rand::thread_rng().gen()))
}

pub fn year(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let start_year = kwargs::int(kw, "start_year")?.unwrap_or(1900);
    let end_year = kwargs::int(kw, "end_year")?.unwrap_or(2100);
    if start_year > end_year {
        return Err(empty_range("year", start_year, end_year));
    }
    Ok(NativeValue::Int(
        rand::thread_rng().gen_range(start_year..=end_year),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kw(value: serde_json::Value) -> Kwargs {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_pyint_bounds() {
        let args = kw(json!({ "min_value": 10, "max_value": 20 }));
        for _ in 0..50 {
            match pyint(&Faker::new(), &args).unwrap() {
                NativeValue::Int(n) => assert!((10..=20).contains(&n)),
                other => panic!("expected int, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_pyint_inverted_range_fails() {
        let args = kw(json!({ "min_value": 5, "max_value": 1 }));
        let err = pyint(&Faker::new(), &args).unwrap_err();
        assert!(matches!(err, FakeError::Range { .. }));
    }

    #[test]
    fn test_pyint_null_uses_default() {
        let args = kw(json!({ "min_value": null, "max_value": 3 }));
        match pyint(&Faker::new(), &args).unwrap() {
            NativeValue::Int(n) => assert!((0..=3).contains(&n)),
            other => panic!("expected int, got {:?}", other),
        }
    }

    #[test]
    fn test_pyfloat_span_must_be_finite() {
        let args = kw(json!({ "min_value": -1e308, "max_value": 1e308 }));
        let err = pyfloat(&Faker::new(), &args).unwrap_err();
        assert!(matches!(err, FakeError::Range { what: "pyfloat", .. }));

        let args = kw(json!({ "min_value": -1e300, "max_value": 1e300 }));
        match pyfloat(&Faker::new(), &args).unwrap() {
            NativeValue::Float(x) => assert!((-1e300..=1e300).contains(&x)),
            other => panic!("expected float, got {:?}", other),
        }
    }

    #[test]
    fn test_pydecimal_shape() {
        let args = kw(json!({ "left_digits": 3, "right_digits": 4 }));
        let value = pydecimal(&Faker::new(), &args).unwrap();
        let text = value.as_str().unwrap();
        let (whole, fraction) = text.split_once('.').unwrap();
        assert!(whole.len() <= 3);
        assert_eq!(fraction.len(), 4);
    }

    #[test]
    fn test_year_bounds() {
        let args = kw(json!({ "start_year": 2000, "end_year": 2000 }));
        assert_eq!(year(&Faker::new(), &args).unwrap(), NativeValue::Int(2000));
    }
}
