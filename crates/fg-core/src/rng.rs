//! The per-simulation random source.
//!
//! # Determinism strategy
//!
//! Every stochastic draw in a run (forager headings, candidate-cell
//! choice, power-law jump lengths, activation order) goes through exactly
//! one `SimRng` owned by the simulation.  Two runs built from the same
//! `SimConfig::seed` therefore produce identical trajectories.  Nothing in
//! the workspace touches a thread-local or OS random source.
//!
//! `child` derives an independent stream for set-up work (e.g. food
//! generation) so that changing how much randomness the set-up consumes
//! does not shift the stepping stream.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seedable simulation RNG.
///
/// Used only from the single simulation thread; parallel analysis code
/// never needs randomness.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform draw from the half-open interval `(0, 1]`.
    ///
    /// Safe to raise to a negative power.
    #[inline]
    pub fn unit_open_zero(&mut self) -> f64 {
        1.0 - self.0.r#gen::<f64>()
    }

    /// Uniform angle in `[-π, π)`.
    #[inline]
    pub fn heading(&mut self) -> f64 {
        self.0.r#gen::<f64>() * std::f64::consts::TAU - std::f64::consts::PI
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Pick `amount` distinct elements of `slice` (fewer if it is shorter),
    /// in random order.
    pub fn sample<T: Copy>(&mut self, slice: &[T], amount: usize) -> Vec<T> {
        let amount = amount.min(slice.len());
        rand::seq::index::sample(&mut self.0, slice.len(), amount)
            .into_iter()
            .map(|i| slice[i])
            .collect()
    }
}
