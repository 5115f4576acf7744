//! Injectable randomness for cell choice and spawn values.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of the two random draws the game needs.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

/// Adapter over any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays scripted draws.
///
/// Once a queue runs dry it keeps answering 0 (index) or 0.0 (unit), which
/// picks the first empty cell and the lower spawn value.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    indices: VecDeque<usize>,
    units: VecDeque<f64>,
}

impl ScriptedSource {
    /// Creates a source from index and unit scripts.
    pub fn new(
        indices: impl IntoIterator<Item = usize>,
        units: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            units: units.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0).min(len - 1)
    }

    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }
}
