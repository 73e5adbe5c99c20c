//! Per-job seeded tie-breaking.

use std::fmt;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Pseudo-random stream used only to order frontier entries of equal cost.
///
/// A job given an explicit seed draws the same tie-break keys every time, so
/// identical inputs route identically. Without a seed, fresh entropy is drawn
/// once when the state is created; the drawn value is still available through
/// [`seed`](Self::seed) so an interesting run can be replayed.
#[derive(Clone)]
pub struct SeedState {
    seed: u64,
    seeded: bool,
    rng: StdRng,
}

impl SeedState {
    /// Seed from `seed`, or from fresh entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// A reproducible stream.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            seeded: true,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A stream seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::random();
        log::info!("no routing seed given, using {seed:#018x}");
        Self {
            seed,
            seeded: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The seed this stream started from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether the caller supplied the seed.
    #[inline]
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Next tie-break key.
    #[inline]
    pub fn next_tiebreak(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

impl fmt::Debug for SeedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedState")
            .field("seed", &format_args!("{:#018x}", self.seed))
            .field("seeded", &self.seeded)
            .finish_non_exhaustive()
    }
}
