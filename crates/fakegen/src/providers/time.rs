//! Dates, date-times, and identifiers.
//!
//! Bounds are relative offsets from now: an optional sign, an integer, and a
//! unit (`s`, `m`, `h`, `d`, `w`, `y`), e.g. `-7d` or `+0d`. `now` is
//! accepted as an alias for a zero offset.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use rand::Rng;

use crate::kwargs::{self, Kwargs};
use crate::{FakeError, Faker, NativeValue};

fn bad_offset(param: &str, raw: &str) -> FakeError {
    FakeError::InvalidArgument {
        param: param.to_string(),
        expected: "relative offset like -7d or +1y",
        got: raw.to_string(),
    }
}

/// Parse a relative offset such as `-7d`.
pub fn parse_offset(param: &str, raw: &str) -> Result<TimeDelta, FakeError> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("now") {
        return Ok(TimeDelta::zero());
    }

    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let unit_at = rest
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| bad_offset(param, raw))?;
    let (digits, unit) = rest.split_at(unit_at);
    let amount: i64 = digits.parse().map_err(|_| bad_offset(param, raw))?;

    let seconds_per_unit = match unit {
        "s" => 1,
        "m" => 60,
        "h" => 3_600,
        "d" => 86_400,
        "w" => 7 * 86_400,
        "y" => 365 * 86_400,
        _ => return Err(bad_offset(param, raw)),
    };

    amount
        .checked_mul(seconds_per_unit)
        .and_then(|secs| secs.checked_mul(sign))
        .and_then(TimeDelta::try_seconds)
        .ok_or_else(|| bad_offset(param, raw))
}

fn random_between(kw: &Kwargs) -> Result<NativeDateTimeRange, FakeError> {
    let start_raw = kwargs::string(kw, "start_date")?.unwrap_or("-7d");
    let end_raw = kwargs::string(kw, "end_date")?.unwrap_or("+0d");
    let now = Utc::now();
    let start = now
        .checked_add_signed(parse_offset("start_date", start_raw)?)
        .ok_or_else(|| bad_offset("start_date", start_raw))?;
    let end = now
        .checked_add_signed(parse_offset("end_date", end_raw)?)
        .ok_or_else(|| bad_offset("end_date", end_raw))?;

    if start > end {
        return Err(FakeError::Range {
            what: "date",
            low: start_raw.to_string(),
            high: end_raw.to_string(),
        });
    }
    Ok(NativeDateTimeRange { start, end })
}

struct NativeDateTimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl NativeDateTimeRange {
    fn sample(&self) -> NaiveDateTime {
        let secs = rand::thread_rng().gen_range(self.start.timestamp()..=self.end.timestamp());
        DateTime::from_timestamp(secs, 0)
            .unwrap_or(self.start)
            .naive_utc()
    }
}

pub fn date(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(NativeValue::Date(random_between(kw)?.sample().date()))
}

pub fn date_time(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(NativeValue::DateTime(random_between(kw)?.sample()))
}

pub fn uuid(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(NativeValue::Uuid(uuid::Uuid::new_v4()))
}
