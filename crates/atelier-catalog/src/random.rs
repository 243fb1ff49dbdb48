//! Selection helpers over an explicit random source.
//!
//! Callers pass the RNG in, so a seeded `StdRng` gives reproducible output.

use rand::distr::uniform::SampleUniform;
use rand::Rng;

/// Uniform integer in `min..=max`. Returns `min` when the range is empty.
pub fn rand_int<R, T>(rng: &mut R, min: T, max: T) -> T
where
    R: Rng + ?Sized,
    T: SampleUniform + PartialOrd + Copy,
{
    if max <= min {
        return min;
    }
    rng.random_range(min..=max)
}

/// One element chosen uniformly, or `None` for an empty slice.
pub fn rand_pick<'a, R, T>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(rand_int(rng, 0, items.len() - 1))
}

/// Between `min` and `max` distinct positions of `items`, capped at `items.len()`.
pub fn rand_pick_many<'a, R, T>(rng: &mut R, items: &'a [T], min: usize, max: usize) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    let wanted = rand_int(rng, min, max).min(items.len());
    rand::seq::index::sample(rng, items.len(), wanted)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}
