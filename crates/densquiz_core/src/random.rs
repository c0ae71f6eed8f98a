//! Randomness capability used by the samplers and the round orchestration.
//!
//! Everything random in a round goes through [`RandomSource`], so tests can
//! drive rounds from a seeded `SmallRng` or from a scripted source.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

/// Source of uniform draws and permutations
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn uniform(&mut self) -> f64;

    /// Shuffle `items` in place, uniformly over all permutations
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn uniform(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }
}

/// Split an independent stream off a parent generator.
///
/// Each call consumes one `u64` from the parent, so the child sequences stay
/// reproducible for a fixed parent seed.
pub fn split_stream<R: Rng + ?Sized>(parent: &mut R) -> SmallRng {
    SmallRng::seed_from_u64(parent.next_u64())
}
