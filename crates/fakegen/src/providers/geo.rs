//! Places and coordinates.

use rand::seq::SliceRandom;
use rand::Rng;

use super::pick;
use crate::kwargs::Kwargs;
use crate::words::{CITIES, COUNTRIES};
use crate::{FakeError, Faker, NativeValue};

/// Coordinates are rounded to six decimal places (roughly 10cm).
fn round6(x: f64) -> f64 {
    (x * 1_000_000.0).round() / 1_000_000.0
}

fn make_latitude() -> f64 {
    round6(rand::thread_rng().gen_range(-90.0..=90.0))
}

fn make_longitude() -> f64 {
    round6(rand::thread_rng().gen_range(-180.0..=180.0))
}

pub fn latitude(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(NativeValue::Float(make_latitude()))
}

pub fn longitude(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(NativeValue::Float(make_longitude()))
}

pub fn latitude_longitude(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(NativeValue::Pair(make_latitude(), make_longitude()))
}

pub fn city(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(pick(&mut rand::thread_rng(), CITIES).into())
}

fn random_country() -> (&'static str, &'static str) {
    COUNTRIES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(("Netherlands", "NL"))
}

pub fn country(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(random_country().0.into())
}

pub fn country_code(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(random_country().1.into())
}
