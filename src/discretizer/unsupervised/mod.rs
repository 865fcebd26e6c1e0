//! Discretizers that ignore class labels.

mod manual;
mod percentile;
mod random;
mod unique;

pub use manual::Manual;
pub use percentile::{EqualSize, PercentileMedian};
pub use random::RandomBaseline;
pub use unique::UniqueValue;

use super::error::Result;
use super::transition::Transition;

/// Builds numeric transitions from values alone.
pub trait UnsupervisedBinning {
    fn name(&self) -> &'static str;

    /// `sorted` is non-empty, free of NaN and ascending.
    fn fit_unsupervised(&self, sorted: &[f64]) -> Result<Vec<Transition>>;
}
