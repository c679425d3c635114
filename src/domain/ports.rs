// Ports for the host-supplied clock and random source.
//
// The simulation never reads ambient time or global randomness; every
// operation that needs either receives it from the caller.

use rand::{Rng, RngCore};

/// Monotonic millisecond clock.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

/// Random values used for spawn points and cannonball ids.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_u32(&mut self) -> u32 {
        RngCore::next_u32(self)
    }

    fn next_unit(&mut self) -> f64 {
        Rng::random::<f64>(self)
    }
}
