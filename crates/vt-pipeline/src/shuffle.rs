//! Flattening grouped evidence into one randomly ordered feed.
//!
//! The random source is injected so tests can pin exact orderings with a
//! seeded generator; production code uses an OS-seeded [`StdRng`].

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Concatenates groups and applies a uniform random permutation.
pub struct ShufflingCollector<R = StdRng> {
    rng: R,
}

impl ShufflingCollector<StdRng> {
    /// Collector seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic collector; equal seeds give equal permutations.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ShufflingCollector<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Concatenate `groups` in group order, then shuffle the result.
    ///
    /// The input is left untouched; every call draws a fresh permutation.
    pub fn flatten<T, S>(&mut self, groups: &[S]) -> Vec<T>
    where
        T: Clone,
        S: AsRef<[T]>,
    {
        let mut out: Vec<T> = groups
            .iter()
            .flat_map(|group| group.as_ref().iter().cloned())
            .collect();
        self.shuffle(&mut out);
        out
    }

    /// Shuffle `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
