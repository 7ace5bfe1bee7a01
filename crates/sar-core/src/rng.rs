//! The simulation's single deterministic random source.
//!
//! # Determinism strategy
//!
//! Every stochastic decision in the model — placement sampling, the per-tick
//! activation shuffle, sensing Bernoulli trials, exploration-cell choice —
//! draws from ONE `SimRng` owned by the simulation instance.  Mixing a seeded
//! model RNG with an ambient process-global RNG on different code paths makes
//! runs irreproducible even with a fixed seed; routing everything through
//! this wrapper is what makes "same seed → same run" hold.
//!
//! Construct with [`SimRng::from_seed_opt`]: `Some(seed)` reproduces a run
//! exactly, `None` seeds from OS entropy for a fresh run each time.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG wrapping a `SmallRng`.
///
/// The type is intentionally `!Sync`; the model is single-threaded and the
/// RNG must never be shared.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed deterministically.  The same seed always produces the same
    /// stream regardless of platform.
    pub fn seeded(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy — no reproducibility guarantee.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Resolve an optional configured seed: `Some` for reproducible runs,
    /// `None` for entropy-seeded ones.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
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
}
