//! Deterministic scenario RNG.
//!
//! # Determinism strategy
//!
//! Randomized request batches (property tests, the `scanbench` demo) draw
//! from a `SmallRng` seeded explicitly by the caller.  The same seed always
//! produces the same batch, so a failing randomized test case can be
//! reproduced from its seed alone.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG for scenario generation.
///
/// Thin wrapper around `SmallRng` that keeps the seeding discipline in one
/// place.  Used only in single-threaded contexts; the simulator itself is
/// fully deterministic and never draws randomness.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
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
}
