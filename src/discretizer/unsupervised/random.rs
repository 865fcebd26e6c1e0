use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{Manual, UnsupervisedBinning};
use crate::discretizer::error::Result;
use crate::discretizer::transition::Transition;

/// Baseline that uses a random subset of the distinct values as manual boundaries.
///
/// Deterministic when a seed is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomBaseline {
    seed: Option<u64>,
}

impl RandomBaseline {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl UnsupervisedBinning for RandomBaseline {
    fn name(&self) -> &'static str {
        "random"
    }

    fn fit_unsupervised(&self, sorted: &[f64]) -> Result<Vec<Transition>> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut distinct = sorted.to_vec();
        distinct.dedup();

        let cut_count = rng.gen_range(0..=distinct.len());
        distinct.shuffle(&mut rng);
        distinct.truncate(cut_count);
        debug!(cut_count, "random boundaries drawn");

        Manual::new(distinct)?.fit_unsupervised(sorted)
    }
}
