//! Seeded random number generation.
//!
//! A run owns exactly one generator, created here and passed by `&mut`
//! to every stochastic operator.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a fresh seed from the thread-local generator.
pub fn random_seed() -> u64 {
    rand::random()
}
