//! Random number sources for [`crate::playout`].
//!
//! Not needed by the minimax engine itself; playouts use them to sample positions
//! reachable by alternating play, e.g. as inputs for property tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices for random playouts.
pub trait RandomGenerator {
    /// Returns an index in `0..len`, or `None` when `len` is zero.
    fn next_index(&mut self, len: usize) -> Option<usize>;

    /// Picks a random element, or `None` for an empty slice.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        items.get(self.next_index(items.len())?)
    }
}

/// Draws from the thread-local generator; not reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| rand::rng().random_range(0..len))
    }
}

/// A reproducible generator: the same seed always yields the same sequence.
#[derive(Debug, Clone)]
pub struct SeededRandomGenerator {
    rng: StdRng,
}

impl SeededRandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededRandomGenerator {
    fn default() -> Self {
        SeededRandomGenerator::new(3819201)
    }
}

impl RandomGenerator for SeededRandomGenerator {
    fn next_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }
}
