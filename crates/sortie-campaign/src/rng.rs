//! Injectable randomness for the campaign.
//!
//! All probabilistic decisions flow through `CampaignRng`. The seeded
//! variant makes a whole campaign reproducible from one seed; the
//! always-pass variant returns guaranteed-pass values for development mode
//! and deterministic tests, so game logic never special-cases "dev".

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Campaign random source.
#[derive(Debug, Clone)]
pub enum CampaignRng {
    /// Seeded ChaCha stream. Same seed = same campaign.
    Seeded(ChaCha8Rng),
    /// Every roll passes; every pick takes the first candidate.
    AlwaysPass,
}

impl CampaignRng {
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn always_pass() -> Self {
        Self::AlwaysPass
    }

    /// Roll whether an event with base probability `prob` (percent) occurs,
    /// scaled by `mult` (typically the source point's strength).
    pub fn roll(&mut self, prob: u32, mult: f64) -> bool {
        match self {
            Self::Seeded(rng) => rng.gen_range(1..=100) as f64 <= prob as f64 * mult,
            Self::AlwaysPass => true,
        }
    }

    /// Pick one element.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        match self {
            Self::Seeded(rng) => items.choose(rng),
            Self::AlwaysPass => items.first(),
        }
    }

    /// Pick up to `count` distinct elements.
    pub fn pick_distinct<T: Copy>(&mut self, items: &[T], count: usize) -> Vec<T> {
        match self {
            Self::Seeded(rng) => {
                let mut shuffled = items.to_vec();
                shuffled.shuffle(rng);
                shuffled.truncate(count);
                shuffled
            }
            Self::AlwaysPass => items.iter().copied().take(count).collect(),
        }
    }

    /// Uniform draw from `lo..hi` (exclusive upper bound).
    pub fn range(&mut self, lo: u32, hi: u32) -> u32 {
        match self {
            Self::Seeded(rng) => rng.gen_range(lo..hi.max(lo + 1)),
            Self::AlwaysPass => lo,
        }
    }

    /// Arbitrary 64-bit draw (environment seeds).
    pub fn next_u64(&mut self) -> u64 {
        match self {
            Self::Seeded(rng) => rng.gen(),
            Self::AlwaysPass => 0,
        }
    }
}
