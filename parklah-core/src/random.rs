//! Injectable source of uniform randomness.
//!
//! The heatmap sampler jitters its samples for visual variety. Taking the
//! randomness as an argument keeps the sampler free of ambient state, so
//! tests can pass a seeded generator and assert exact output.

use rand::RngCore;
use rand::distributions::{Distribution, Standard};

/// Produces uniformly distributed values in `[0.0, 1.0)`.
///
/// Every [`rand::RngCore`] is a `RandomSource`, so seeded generators such as
/// `rand_chacha::ChaCha8Rng` plug in directly.
///
/// # Examples
/// ```
/// use parklah_core::RandomSource;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let value = rng.next_unit();
/// assert!((0.0..1.0).contains(&value));
/// ```
pub trait RandomSource {
    /// Next value in `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f64;
}

impl<R> RandomSource for R
where
    R: RngCore + ?Sized,
{
    fn next_unit(&mut self) -> f64 {
        Standard.sample(self)
    }
}
