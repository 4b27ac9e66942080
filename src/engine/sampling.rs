//! Random selection helpers shared by every generator.

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform choice from a non-empty pool.
pub fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, pool: &[T]) -> T {
    debug_assert!(!pool.is_empty(), "pick from an empty pool");
    pool[rng.gen_range(0..pool.len())]
}

/// Up to `k` distinct elements without replacement.
///
/// `k` is clamped to the pool size, so asking for more than the pool
/// holds returns the whole pool in random order instead of failing.
pub fn sample<T: Clone, R: Rng + ?Sized>(rng: &mut R, pool: &[T], k: usize) -> Vec<T> {
    let k = k.min(pool.len());
    pool.choose_multiple(rng, k).cloned().collect()
}

/// Draw the sample size from `range`, then [`sample`].
pub fn sample_between<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[T],
    range: RangeInclusive<usize>,
) -> Vec<T> {
    let k = rng.gen_range(range);
    sample(rng, pool, k)
}

/// [`sample`] for static phrase tables, returning owned strings.
pub fn sample_phrases<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[&str],
    range: RangeInclusive<usize>,
) -> Vec<String> {
    sample_between(rng, pool, range)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Bernoulli trial.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    rng.gen_bool(probability.clamp(0.0, 1.0))
}
