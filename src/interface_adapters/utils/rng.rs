use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random source for a new room.
///
/// A fixed seed makes every room replay identically for identical inputs;
/// without one each room draws fresh OS entropy.
pub fn room_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
