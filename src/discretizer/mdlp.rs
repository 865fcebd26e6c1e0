//! MDLP: recursive binary entropy splitting with the minimum description length stop rule.
//!
//! Fayyad & Irani, "Multi-Interval Discretization of Continuous-Valued Attributes for
//! Classification Learning", 1993.

use tracing::{debug, trace};

use super::error::Result;
use super::interval::{intervals_from_ends, Interval};
use super::optimizer::{label_intervals, SupervisedOptimizer};
use super::partition::equal_class_split;
use super::samples::SortedSamples;
use super::transition::{BinLabeling, Transition};

/// Shannon entropy (base 2) of a class distribution, with `0 * log2(0) = 0`.
pub fn class_entropy(class_dist: &[usize]) -> f64 {
    let total: usize = class_dist.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    class_dist
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy reduction from splitting `parent` into `left` and `right`.
pub fn information_gain(parent: &Interval<'_>, left: &Interval<'_>, right: &Interval<'_>) -> f64 {
    let n = parent.size() as f64;
    let weighted = left.size() as f64 / n * class_entropy(left.class_dist())
        + right.size() as f64 / n * class_entropy(right.class_dist());
    class_entropy(parent.class_dist()) - weighted
}

/// Minimum gain a split of `parent` must strictly exceed to be accepted.
///
/// `log2(N - 1) / N + delta / N` with
/// `delta = log2(3^r - 2) - (r * H(S) - r1 * H(S1) - r2 * H(S2))`, where `r`, `r1`, `r2`
/// count the classes present in the parent and each side.
pub fn mdl_threshold(parent: &Interval<'_>, left: &Interval<'_>, right: &Interval<'_>) -> f64 {
    let n = parent.size() as f64;
    let r = parent.classes_present() as f64;
    let r1 = left.classes_present() as f64;
    let r2 = right.classes_present() as f64;

    let delta = (3f64.powf(r) - 2.0).log2()
        - (r * class_entropy(parent.class_dist())
            - r1 * class_entropy(left.class_dist())
            - r2 * class_entropy(right.class_dist()));

    (n - 1.0).log2() / n + delta / n
}

/// Accepted cut indices, ascending. Each index is the last sample of a bin.
///
/// Candidates are the end indices of the equal-class partition, so runs of identical
/// values are never split.
pub fn mdlp_cut_indices(samples: &SortedSamples) -> Vec<usize> {
    let candidates: Vec<usize> = equal_class_split(samples)
        .iter()
        .map(Interval::end)
        .collect();

    let mut cuts = Vec::new();
    split_recursive(samples, &candidates, 0, samples.len() - 1, &mut cuts);
    cuts.sort_unstable();
    cuts
}

fn split_recursive(
    samples: &SortedSamples,
    candidates: &[usize],
    begin: usize,
    end: usize,
    cuts: &mut Vec<usize>,
) {
    let parent = Interval::new(samples, begin, end);

    // Best candidate in [begin, end): maximum gain, first one on ties
    let mut best: Option<(f64, usize)> = None;
    for &index in candidates.iter().filter(|&&i| i >= begin && i < end) {
        let left = Interval::new(samples, begin, index);
        let right = Interval::new(samples, index + 1, end);
        let gain = information_gain(&parent, &left, &right);
        trace!(begin, end, index, gain, "mdlp candidate");
        if best.map_or(true, |(best_gain, _)| gain > best_gain) {
            best = Some((gain, index));
        }
    }

    let Some((gain, index)) = best else {
        return;
    };
    let left = Interval::new(samples, begin, index);
    let right = Interval::new(samples, index + 1, end);
    let threshold = mdl_threshold(&parent, &left, &right);
    if gain <= threshold {
        trace!(begin, end, gain, threshold, "mdlp rejected split");
        return;
    }

    debug!(index, value = samples.value(index), gain, threshold, "mdlp accepted cut");
    cuts.push(index);
    split_recursive(samples, candidates, begin, index, cuts);
    split_recursive(samples, candidates, index + 1, end, cuts);
}

/// MDLP optimizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mdlp {
    labeling: BinLabeling,
}

impl Mdlp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labeling(labeling: BinLabeling) -> Self {
        Self { labeling }
    }

    pub fn labeling(&self) -> BinLabeling {
        self.labeling
    }
}

impl SupervisedOptimizer for Mdlp {
    fn name(&self) -> &'static str {
        "mdlp"
    }

    fn fit_supervised(&self, samples: &SortedSamples) -> Result<Vec<Transition>> {
        let cuts = mdlp_cut_indices(samples);
        let intervals = intervals_from_ends(samples, &cuts);
        debug!(bins = intervals.len(), "mdlp finished");
        Ok(label_intervals(samples, &intervals, self.labeling))
    }
}
