//! Seedable random source owned by each engine.
//!
//! Every engine holds exactly one [`DrdRng`]; strategies borrow it
//! mutably, so a fixed seed reproduces a whole run.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// The generator type used throughout the crate.
pub type DrdRng = StdRng;

/// Creates a generator from a fixed seed.
pub fn create_rng(seed: u64) -> DrdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from OS entropy when `None`.
pub fn rng_from_option(seed: Option<u64>) -> DrdRng {
    match seed {
        Some(s) => create_rng(s),
        None => create_rng(rand::random()),
    }
}
