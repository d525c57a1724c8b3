//! Provider implementations, grouped by the kind of data they produce.
//!
//! Every function here matches [`crate::ProviderFn`] and is wired into the
//! static table in [`crate::registry`].

pub mod binary;
pub mod files;
pub mod geo;
pub mod numbers;
pub mod person;
pub mod text;
pub mod time;

use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one item from a non-empty pool.
pub(crate) fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}
