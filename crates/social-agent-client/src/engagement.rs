//! Placeholder engagement numbers for freshly published ideas.
//!
//! These are not real metrics. Counts are drawn from fixed ranges:
//! likes `[50, 250)`, comments `[10, 40)`, shares `[5, 25)`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use social_agent_core::Engagement;

/// Source of engagement values assigned on publish.
pub trait EngagementGenerator: Send {
    fn generate(&mut self) -> Engagement;
}

/// Thread-local RNG; used in demo mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomEngagement;

impl EngagementGenerator for RandomEngagement {
    fn generate(&mut self) -> Engagement {
        sample(&mut rand::rng())
    }
}

/// Fixed-seed RNG so repeated runs produce identical numbers.
#[derive(Debug, Clone)]
pub struct SeededEngagement {
    rng: StdRng,
}

impl SeededEngagement {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl EngagementGenerator for SeededEngagement {
    fn generate(&mut self) -> Engagement {
        sample(&mut self.rng)
    }
}

/// Picks the seeded generator when a seed is configured.
#[must_use]
pub fn from_seed(seed: Option<u64>) -> Box<dyn EngagementGenerator> {
    match seed {
        Some(seed) => Box::new(SeededEngagement::new(seed)),
        None => Box::new(RandomEngagement),
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R) -> Engagement {
    Engagement {
        likes: rng.random_range(50..250),
        comments: rng.random_range(10..40),
        shares: rng.random_range(5..25),
    }
}
