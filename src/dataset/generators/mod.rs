//! Synthetic dataset generators.

pub mod hyperplane;
pub mod swiss_roll;

pub use hyperplane::Hyperplane;
pub use swiss_roll::SwissRoll;

use crate::core::error::Result;
use crate::dataset::Labeled;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces labeled samples from a known distribution.
pub trait Generator {
    /// Number of feature columns in every generated sample.
    fn dimensions(&self) -> usize;

    /// Draw `n` labeled samples using the given random source.
    fn generate_with<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Labeled>;

    /// Draw `n` labeled samples from a generator seeded with `seed`.
    fn generate_seeded(&self, n: usize, seed: u64) -> Result<Labeled> {
        self.generate_with(n, &mut StdRng::seed_from_u64(seed))
    }

    /// Draw `n` labeled samples from an entropy-seeded generator.
    fn generate(&self, n: usize) -> Result<Labeled> {
        self.generate_with(n, &mut StdRng::from_entropy())
    }
}
