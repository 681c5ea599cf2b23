//! Numeric value generators.

use fixture_core::{FloatRange, IntRange};
use rand::Rng;

/// Round to 2 fractional digits, halves away from zero.
///
/// Finite for any `value` within [`fixture_core::MAX_AMOUNT`].
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Uniform value in the inclusive range, rounded to cents.
pub fn random_cents<R: Rng + ?Sized>(rng: &mut R, range: FloatRange) -> f64 {
    round_to_cents(rng.gen_range(range.min..=range.max))
}

/// `count` uniform integers in the inclusive range. Duplicates are allowed.
pub fn random_ids<R: Rng + ?Sized>(rng: &mut R, count: usize, range: IntRange) -> Vec<u32> {
    (0..count)
        .map(|_| rng.gen_range(range.min..=range.max))
        .collect()
}
