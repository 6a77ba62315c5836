// Default seeds for generators constructed without one.
// Integers drawn uniformly from [-SEED_BOUND, SEED_BOUND], all exact in an f64.

use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::targets;

// `2^53`, the bound (inclusive, both signs) of randomly drawn seeds
pub const SEED_BOUND: i64 = 1 << 53;

// Shared by every seedless construction in the process, seeded from OS entropy
static SEED_RNG: Lazy<Mutex<StdRng>> = Lazy::new(|| Mutex::new(StdRng::from_entropy()));

// Draw a seed from the process-wide generator. Not reproducible across runs.
pub fn random_seed() -> f64 {
    // A panic while holding the lock can't leave the rng half-updated
    let mut rng = SEED_RNG.lock().unwrap_or_else(PoisonError::into_inner);
    random_seed_from(&mut *rng)
}

// Draw a seed from a caller-supplied generator.
pub fn random_seed_from<R: Rng>(rng: &mut R) -> f64 {
    let seed = rng.gen_range(-SEED_BOUND..=SEED_BOUND);
    trace!(target: targets::SEED, seed, "drew random seed");
    seed as f64
}
