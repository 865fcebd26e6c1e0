use tracing::debug;

use super::UnsupervisedBinning;
use crate::discretizer::error::{DiscretizeError, Result};
use crate::discretizer::transition::{transitions_from_cut_points, Transition};

/// Equal-frequency classes cut halfway between neighbouring values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentileMedian {
    class_count: usize,
}

impl PercentileMedian {
    pub fn new(class_count: usize) -> Result<Self> {
        if class_count == 0 {
            return Err(DiscretizeError::InvalidParameter(
                "percentile discretization needs at least one class".to_string(),
            ));
        }
        Ok(Self { class_count })
    }

    pub fn class_count(&self) -> usize {
        self.class_count
    }

    /// Cut points between classes of (almost) equal size.
    ///
    /// The remainder of `n / classes` goes one sample at a time to the leading classes.
    pub fn cut_points(&self, sorted: &[f64]) -> Vec<f64> {
        let n = sorted.len();
        let classes = self.class_count.min(n);
        if classes < 2 {
            return Vec::new();
        }
        let per_class = n / classes;
        let mut backlog = n % classes;

        let mut cut_points = Vec::with_capacity(classes - 1);
        let mut end = per_class - 1;
        for _ in 1..classes {
            if backlog > 0 {
                end += 1;
                backlog -= 1;
            }
            cut_points.push((sorted[end] + sorted[end + 1]) / 2.0);
            end += per_class;
        }
        cut_points
    }
}

impl UnsupervisedBinning for PercentileMedian {
    fn name(&self) -> &'static str {
        "percentile"
    }

    fn fit_unsupervised(&self, sorted: &[f64]) -> Result<Vec<Transition>> {
        let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
            return Err(DiscretizeError::EmptyInput);
        };
        let cut_points = self.cut_points(sorted);
        debug!(classes = self.class_count, cuts = cut_points.len(), "percentile cut points");
        Ok(transitions_from_cut_points(&cut_points, min, max))
    }
}

/// Classes holding a fixed number of samples each.
///
/// A class size of 0 picks `floor(sqrt(n))` (proportional k-interval discretization).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualSize {
    class_size: usize,
}

impl EqualSize {
    pub fn new(class_size: usize) -> Self {
        Self { class_size }
    }

    /// Proportional k-interval discretization.
    pub fn pkid() -> Self {
        Self::default()
    }

    pub fn class_size(&self) -> usize {
        self.class_size
    }

    fn effective_class_size(&self, n: usize) -> usize {
        match self.class_size {
            0 => ((n as f64).sqrt().floor() as usize).max(1),
            size if size >= n => n,
            size => size,
        }
    }
}

impl UnsupervisedBinning for EqualSize {
    fn name(&self) -> &'static str {
        "equal-size"
    }

    fn fit_unsupervised(&self, sorted: &[f64]) -> Result<Vec<Transition>> {
        if sorted.is_empty() {
            return Err(DiscretizeError::EmptyInput);
        }
        let class_size = self.effective_class_size(sorted.len());
        PercentileMedian::new(sorted.len() / class_size)?.fit_unsupervised(sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(transitions: &[Transition]) -> Vec<(f64, f64)> {
        transitions
            .iter()
            .map(|t| {
                let origin = t.origin().as_numeric().unwrap();
                (origin.min(), origin.max())
            })
            .collect()
    }

    fn range(from: i32, to: i32) -> Vec<f64> {
        (from..=to).map(f64::from).collect()
    }

    #[test]
    fn test_percentile_cut_points() {
        let mut values: Vec<f64> = vec![1.0, 2.0, 3.0, 0.2, 1.3, 2.4];
        values.sort_by(|a, b| a.total_cmp(b));
        let percentile = PercentileMedian::new(3).unwrap();
        assert_eq!(percentile.cut_points(&values), vec![1.15, 2.2]);
    }

    #[test]
    fn test_percentile_on_twenty_values() {
        let transitions = PercentileMedian::new(3)
            .unwrap()
            .fit_unsupervised(&range(1, 20))
            .unwrap();
        assert_eq!(
            bounds(&transitions),
            vec![(1.0, 7.5), (7.5, 14.5), (14.5, 20.0)]
        );
    }

    #[test]
    fn test_percentile_collapses_repeated_values() {
        let mut values = vec![0.0; 10];
        values.push(3.0);
        let transitions = PercentileMedian::new(3)
            .unwrap()
            .fit_unsupervised(&values)
            .unwrap();
        assert_eq!(bounds(&transitions), vec![(0.0, 0.0), (0.0, 3.0)]);
    }

    #[test]
    fn test_percentile_more_classes_than_values() {
        let transitions = PercentileMedian::new(10)
            .unwrap()
            .fit_unsupervised(&[1.0, 2.0])
            .unwrap();
        assert_eq!(transitions.len(), 2);
    }

    #[test]
    fn test_percentile_zero_classes_rejected() {
        assert!(PercentileMedian::new(0).is_err());
    }

    #[test]
    fn test_equal_size_pkid() {
        let transitions = EqualSize::pkid().fit_unsupervised(&range(0, 15)).unwrap();
        assert_eq!(transitions.len(), 4);

        let mut values = vec![0.0; 9];
        values.extend(range(9, 15));
        let transitions = EqualSize::pkid().fit_unsupervised(&values).unwrap();
        assert_eq!(transitions.len(), 3);
    }

    #[test]
    fn test_equal_size_fixed() {
        assert_eq!(EqualSize::new(5).fit_unsupervised(&range(0, 10)).unwrap().len(), 2);
        assert_eq!(EqualSize::new(100).fit_unsupervised(&range(0, 10)).unwrap().len(), 1);

        let transitions = EqualSize::new(5).fit_unsupervised(&range(0, 29)).unwrap();
        assert_eq!(transitions.len(), 6);
        assert_eq!(bounds(&transitions)[0], (0.0, 4.5));
        assert_eq!(bounds(&transitions)[5], (24.5, 29.0));
        assert_eq!(transitions[5].discretized_value(), 5.0);
    }
}
