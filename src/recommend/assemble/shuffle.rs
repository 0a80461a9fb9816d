use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Build a generator keyed to the request seed.
///
/// The same seed string always produces the same generator state, so
/// two identical requests shuffle their category buckets identically.
pub(crate) fn rng_for_seed(seed: &str) -> StdRng {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    StdRng::seed_from_u64(hasher.finish())
}
