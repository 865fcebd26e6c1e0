//! Ameva: greedy forward selection of cut points maximizing the Ameva criterion.
//!
//! Gonzalez-Abril et al., "Ameva: An autonomous discretization algorithm", 2009.

use tracing::{debug, trace};

use super::error::Result;
use super::interval::{intervals_from_ends, Interval};
use super::optimizer::{label_intervals, SupervisedOptimizer};
use super::samples::SortedSamples;
use super::transition::{BinLabeling, Transition};

/// Ameva criterion of a partition.
///
/// `N * (sum_c sum_i n(c,i)^2 / (n(c) * n(i)) - 1) / (k * (r - 1))` where `k` is the
/// number of intervals, `r = class_totals.len()` and `N` the number of samples covered
/// by `intervals`. Classes with a zero total contribute nothing. Returns 0 when fewer
/// than two classes or no intervals are given.
pub fn ameva_criterion(intervals: &[Interval<'_>], class_totals: &[usize]) -> f64 {
    let k = intervals.len();
    let r = class_totals.len();
    if k == 0 || r < 2 {
        return 0.0;
    }
    let n: usize = intervals.iter().map(Interval::size).sum();

    let mut chi = 0.0;
    for (c, &class_total) in class_totals.iter().enumerate() {
        if class_total == 0 {
            continue;
        }
        for interval in intervals {
            let count = interval.class_dist()[c] as f64;
            chi += count * count / (class_total as f64 * interval.size() as f64);
        }
    }

    n as f64 * (chi - 1.0) / (k as f64 * (r - 1) as f64)
}

/// Result of the forward selection.
#[derive(Debug, Clone, PartialEq)]
pub struct AmevaSearch {
    /// Accepted cut points, ascending
    pub cut_points: Vec<f64>,
    /// Criterion of the final partition; 0 when nothing was accepted
    pub criterion: f64,
}

/// Run the greedy forward selection over the midpoints between distinct values.
///
/// Each round adds the single candidate that maximizes the criterion, as long as it
/// strictly beats the best value so far (initially 0). Ties go to the lowest candidate.
pub fn ameva_search(samples: &SortedSamples) -> AmevaSearch {
    let class_totals = samples.class_totals();
    let mut candidates = samples.distinct_midpoints();
    let mut accepted: Vec<f64> = Vec::new();
    let mut best = 0.0;

    if samples.num_classes() < 2 {
        return AmevaSearch {
            cut_points: accepted,
            criterion: best,
        };
    }

    while !candidates.is_empty() {
        let mut round_best = best;
        let mut round_pick = None;

        for (i, &candidate) in candidates.iter().enumerate() {
            let mut cuts = accepted.clone();
            cuts.push(candidate);
            let intervals = intervals_for_cuts(samples, &cuts);
            let value = ameva_criterion(&intervals, &class_totals);
            trace!(candidate, value, "ameva candidate");

            if value > round_best {
                round_best = value;
                round_pick = Some(i);
            }
        }

        let Some(i) = round_pick else {
            break;
        };
        let cut_point = candidates.remove(i);
        debug!(cut_point, criterion = round_best, "ameva accepted cut point");
        accepted.push(cut_point);
        best = round_best;
    }

    accepted.sort_by(|a, b| a.total_cmp(b));
    AmevaSearch {
        cut_points: accepted,
        criterion: best,
    }
}

/// Intervals induced by cut points; each cut separates values below it from the rest.
fn intervals_for_cuts<'a>(samples: &'a SortedSamples, cuts: &[f64]) -> Vec<Interval<'a>> {
    let mut ends: Vec<usize> = cuts
        .iter()
        .map(|&cut| samples.partition_point(cut))
        .filter(|&p| p > 0 && p < samples.len())
        .map(|p| p - 1)
        .collect();
    ends.sort_unstable();
    ends.dedup();
    intervals_from_ends(samples, &ends)
}

/// Ameva optimizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ameva {
    labeling: BinLabeling,
}

impl Ameva {
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

impl SupervisedOptimizer for Ameva {
    fn name(&self) -> &'static str {
        "ameva"
    }

    fn fit_supervised(&self, samples: &SortedSamples) -> Result<Vec<Transition>> {
        let search = ameva_search(samples);
        let intervals = intervals_for_cuts(samples, &search.cut_points);
        debug!(
            bins = intervals.len(),
            criterion = search.criterion,
            "ameva finished"
        );
        Ok(label_intervals(samples, &intervals, self.labeling))
    }
}
