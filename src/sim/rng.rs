//! Uniform range sampler for spawn randomization
//!
//! One generator per game session, seeded from the clock at startup. There
//! is no re-seeding API; tests construct from an explicit seed instead.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform `f32` sampler over closed ranges.
///
/// Single-threaded by design: the whole game runs on one update thread and
/// the sampler is passed by mutable reference to whoever spawns.
#[derive(Debug, Clone)]
pub struct SpawnRng {
    rng: Pcg32,
}

impl SpawnRng {
    /// Generator seeded from the current time, for production sessions.
    pub fn seeded_from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as u64)
            .unwrap_or_default();
        log::debug!("spawn rng seeded from clock: {seed}");
        Self::from_seed(seed)
    }

    /// Generator with a fixed seed, for reproducible runs and tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// A value uniformly distributed in `[lo, hi]`. Requires `lo <= hi`.
    pub fn sample(&mut self, lo: f32, hi: f32) -> f32 {
        self.rng.random_range(lo..=hi)
    }
}
