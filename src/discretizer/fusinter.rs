//! FUSINTER: bottom-up merging of the equal-class partition under a smoothed
//! quadratic entropy criterion.
//!
//! Zighed, Rabaséda & Rakotomalala, "FUSINTER: A Method for Discretization of
//! Continuous Attributes", 1998.

use tracing::{debug, trace};

use super::error::{DiscretizeError, Result};
use super::interval::Interval;
use super::optimizer::{label_intervals, SupervisedOptimizer};
use super::partition::equal_class_split;
use super::samples::SortedSamples;
use super::transition::{BinLabeling, Transition};

/// Default Laplace-style smoothing added to every class count
pub const DEFAULT_LAMBDA: f64 = 1.0;

/// Default weight of the entropy part against the interval-count penalty
pub const DEFAULT_ALPHA: f64 = 0.975;

/// Smoothing and weighting parameters of the criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusinterParams {
    pub lambda: f64,
    pub alpha: f64,
}

impl Default for FusinterParams {
    fn default() -> Self {
        Self {
            lambda: DEFAULT_LAMBDA,
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl FusinterParams {
    /// `lambda` must be positive and `alpha` within `[0, 1]`.
    pub fn new(lambda: f64, alpha: f64) -> Result<Self> {
        if !(lambda.is_finite() && lambda > 0.0) {
            return Err(DiscretizeError::InvalidParameter(format!(
                "lambda must be a positive number, got {}",
                lambda
            )));
        }
        if !(0.0..=1.0).contains(&alpha) {
            return Err(DiscretizeError::InvalidParameter(format!(
                "alpha must be within [0, 1], got {}",
                alpha
            )));
        }
        Ok(Self { lambda, alpha })
    }
}

/// Contribution of one interval to the criterion.
///
/// `alpha * (n_i / N) * sum_c q(1 - q) + (1 - alpha) * (m * lambda / n_i)` with
/// `q = (n(c,i) + lambda) / (n_i + m * lambda)`.
pub fn fusinter_term(
    interval: &Interval<'_>,
    num_classes: usize,
    total: usize,
    params: FusinterParams,
) -> f64 {
    let m = num_classes as f64;
    let size = interval.size() as f64;
    let FusinterParams { lambda, alpha } = params;

    let impurity: f64 = interval
        .class_dist()
        .iter()
        .map(|&count| {
            let q = (count as f64 + lambda) / (size + m * lambda);
            q * (1.0 - q)
        })
        .sum();

    alpha * (size / total as f64) * impurity + (1.0 - alpha) * (m * lambda / size)
}

/// Criterion of a whole partition: the sum of its interval terms. Lower is better.
pub fn fusinter_criterion(
    intervals: &[Interval<'_>],
    num_classes: usize,
    total: usize,
    params: FusinterParams,
) -> f64 {
    intervals
        .iter()
        .map(|interval| fusinter_term(interval, num_classes, total, params))
        .sum()
}

/// Outcome of the merge loop.
#[derive(Debug, Clone)]
pub struct FusinterSearch<'a> {
    pub intervals: Vec<Interval<'a>>,
    /// Criterion before the first merge and after every merge
    pub history: Vec<f64>,
}

/// Merge adjacent intervals of the equal-class partition while the criterion improves.
///
/// Each round merges the pair with the largest strictly positive improvement, the first
/// such pair on ties.
pub fn fusinter_search(samples: &SortedSamples, params: FusinterParams) -> FusinterSearch<'_> {
    let m = samples.num_classes();
    let n = samples.len();
    let mut intervals = equal_class_split(samples);
    let mut terms: Vec<f64> = intervals
        .iter()
        .map(|interval| fusinter_term(interval, m, n, params))
        .collect();
    let mut history = vec![terms.iter().sum()];

    while intervals.len() > 1 {
        let mut best_improvement = 0.0;
        let mut best: Option<(usize, Interval<'_>, f64)> = None;

        for i in 0..intervals.len() - 1 {
            let merged = intervals[i].merge(&intervals[i + 1]);
            let merged_term = fusinter_term(&merged, m, n, params);
            let improvement = terms[i] + terms[i + 1] - merged_term;
            trace!(pair = i, improvement, "fusinter candidate merge");
            if improvement > best_improvement {
                best_improvement = improvement;
                best = Some((i, merged, merged_term));
            }
        }

        let Some((i, merged, merged_term)) = best else {
            break;
        };
        debug!(
            begin = merged.begin(),
            end = merged.end(),
            improvement = best_improvement,
            "fusinter merged intervals"
        );
        intervals[i] = merged;
        intervals.remove(i + 1);
        terms[i] = merged_term;
        terms.remove(i + 1);
        history.push(terms.iter().sum());
    }

    FusinterSearch { intervals, history }
}

/// FUSINTER optimizer. Labels bins by ordinal position unless told otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusInter {
    params: FusinterParams,
    labeling: BinLabeling,
}

impl Default for FusInter {
    fn default() -> Self {
        Self {
            params: FusinterParams::default(),
            labeling: BinLabeling::Ordinal,
        }
    }
}

impl FusInter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: FusinterParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn labeling(mut self, labeling: BinLabeling) -> Self {
        self.labeling = labeling;
        self
    }

    pub fn params(&self) -> FusinterParams {
        self.params
    }
}

impl SupervisedOptimizer for FusInter {
    fn name(&self) -> &'static str {
        "fusinter"
    }

    fn fit_supervised(&self, samples: &SortedSamples) -> Result<Vec<Transition>> {
        let search = fusinter_search(samples, self.params);
        debug!(
            bins = search.intervals.len(),
            merges = search.history.len() - 1,
            "fusinter finished"
        );
        Ok(label_intervals(samples, &search.intervals, self.labeling))
    }
}
