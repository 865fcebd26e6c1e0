//! The seam shared by the supervised interval optimizers.

use super::error::Result;
use super::interval::{boundary_cut_points, Interval};
use super::samples::SortedSamples;
use super::transition::{transitions_from_cut_points, BinLabeling, Transition};

/// A supervised optimizer turns sorted (value, label) pairs into numeric transitions.
///
/// Implementations keep no state between calls; all scratch data lives in the call.
pub trait SupervisedOptimizer {
    /// Short lowercase name used in logs and reports.
    fn name(&self) -> &'static str;

    fn fit_supervised(&self, samples: &SortedSamples) -> Result<Vec<Transition>>;
}

/// Turn a final interval list into transitions with the requested labeling.
pub(crate) fn label_intervals(
    samples: &SortedSamples,
    intervals: &[Interval<'_>],
    labeling: BinLabeling,
) -> Vec<Transition> {
    match labeling {
        BinLabeling::Median => intervals.iter().map(Interval::to_transition).collect(),
        BinLabeling::Ordinal => transitions_from_cut_points(
            &boundary_cut_points(intervals),
            samples.min(),
            samples.max(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discretizer::interval::intervals_from_ends;

    #[test]
    fn test_both_labelings_cover_same_range() {
        let samples =
            SortedSamples::new((1..=6).map(|v| (v as f64, (v > 3) as u8 as f64)).collect()).unwrap();
        let intervals = intervals_from_ends(&samples, &[2]);

        let median = label_intervals(&samples, &intervals, BinLabeling::Median);
        let ordinal = label_intervals(&samples, &intervals, BinLabeling::Ordinal);

        let values: Vec<f64> = median.iter().map(|t| t.discretized_value()).collect();
        assert_eq!(values, vec![2.0, 5.0]);
        let values: Vec<f64> = ordinal.iter().map(|t| t.discretized_value()).collect();
        assert_eq!(values, vec![0.0, 1.0]);

        let ordinal_first = ordinal[0].origin().as_numeric().unwrap();
        assert_eq!((ordinal_first.min(), ordinal_first.max()), (1.0, 3.5));
    }
}
