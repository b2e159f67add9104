//! Random sources for default generation.
//!
//! Generation only ever asks "pick an index below `len`". Production code uses
//! [`RngSource`]; tests use [`RngSource::seeded`] or a [`ScriptedSource`] to
//! make outcomes exact.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform index selection.
pub trait RandomSource {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// A [`RandomSource`] backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct RngSource(StdRng);

/// A seed for [`RngSource::seeded`] drawn from the thread RNG.
///
/// Callers that report the seed can let a user replay the same schedule.
#[must_use]
pub fn fresh_seed() -> u64 {
    rand::random()
}

impl RngSource {
    /// Seeded from OS entropy; outcomes differ from run to run.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Reproducible: the same seed and roster yield the same schedule.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for RngSource {
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick called with an empty candidate list");
        self.0.gen_range(0..len.max(1))
    }
}

/// Replays a fixed list of picks, cycling when it runs out.
///
/// Each scripted value is reduced modulo `len`, so a script of `[0]` always
/// takes the first eligible candidate.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    #[must_use]
    pub const fn new(picks: Vec<usize>) -> Self {
        Self { picks, cursor: 0 }
    }

    /// Always choose the first eligible candidate.
    #[must_use]
    pub fn first() -> Self {
        Self::new(vec![0])
    }

    /// How many picks have been requested.
    #[must_use]
    pub const fn calls(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, len: usize) -> usize {
        let value = if self.picks.is_empty() {
            0
        } else {
            self.picks[self.cursor % self.picks.len()]
        };
        self.cursor += 1;
        value % len.max(1)
    }
}
