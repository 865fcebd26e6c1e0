//! Index ranges over the shared sorted samples.

use super::origin::Origin;
use super::samples::SortedSamples;
use super::transition::Transition;

/// A contiguous, inclusive index range `[begin, end]` over [`SortedSamples`].
///
/// Borrows the samples; the class distribution is taken from the samples' prefix
/// counts when the interval is created.
#[derive(Debug, Clone)]
pub struct Interval<'a> {
    samples: &'a SortedSamples,
    begin: usize,
    end: usize,
    class_dist: Vec<usize>,
}

impl<'a> Interval<'a> {
    /// # Panics
    /// If `begin > end` or `end` is out of bounds.
    pub fn new(samples: &'a SortedSamples, begin: usize, end: usize) -> Self {
        assert!(
            begin <= end && end < samples.len(),
            "interval [{}, {}] outside of {} samples",
            begin,
            end,
            samples.len()
        );
        Self {
            samples,
            begin,
            end,
            class_dist: samples.class_distribution(begin, end),
        }
    }

    pub fn begin(&self) -> usize {
        self.begin
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn size(&self) -> usize {
        self.end - self.begin + 1
    }

    /// Per-class counts, indexed like [`SortedSamples::classes`].
    pub fn class_dist(&self) -> &[usize] {
        &self.class_dist
    }

    /// Number of classes with a nonzero count.
    pub fn classes_present(&self) -> usize {
        self.class_dist.iter().filter(|&&c| c > 0).count()
    }

    pub fn min_value(&self) -> f64 {
        self.samples.value(self.begin)
    }

    pub fn max_value(&self) -> f64 {
        self.samples.value(self.end)
    }

    /// Median of the values in range; the mean of the two middle values for even sizes.
    pub fn median(&self) -> f64 {
        let values = &self.samples.values()[self.begin..=self.end];
        let mid = values.len() / 2;
        if values.len() % 2 == 1 {
            values[mid]
        } else {
            (values[mid - 1] + values[mid]) / 2.0
        }
    }

    /// Interval spanning `self` and the directly following `next`.
    pub fn merge(&self, next: &Interval<'a>) -> Interval<'a> {
        debug_assert_eq!(self.end + 1, next.begin);
        Interval::new(self.samples, self.begin, next.end)
    }

    /// Numeric transition over `[min_value, max_value]` labeled with the median.
    pub fn to_transition(&self) -> Transition {
        Transition::new(
            Origin::numeric(self.min_value(), self.max_value()),
            self.median(),
        )
    }
}

/// Slice `[0, len)` into intervals ending at each of the sorted `ends`.
pub fn intervals_from_ends<'a>(samples: &'a SortedSamples, ends: &[usize]) -> Vec<Interval<'a>> {
    let mut intervals = Vec::with_capacity(ends.len() + 1);
    let mut begin = 0;
    for &end in ends {
        intervals.push(Interval::new(samples, begin, end));
        begin = end + 1;
    }
    if begin < samples.len() {
        intervals.push(Interval::new(samples, begin, samples.len() - 1));
    }
    intervals
}

/// Cut points halfway between each interval's last value and the next interval's first value.
pub fn boundary_cut_points(intervals: &[Interval<'_>]) -> Vec<f64> {
    intervals
        .windows(2)
        .map(|w| (w[0].max_value() + w[1].min_value()) / 2.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> SortedSamples {
        SortedSamples::new((1..=10).map(|v| (v as f64, if v <= 5 { 0.0 } else { 1.0 })).collect())
            .unwrap()
    }

    #[test]
    fn test_size_and_distribution() {
        let samples = samples();
        let interval = Interval::new(&samples, 3, 6);
        assert_eq!(interval.size(), 4);
        assert_eq!(interval.class_dist(), &[2, 2]);
        assert_eq!(interval.classes_present(), 2);
    }

    #[test]
    fn test_median_odd_and_even() {
        let samples = samples();
        assert_eq!(Interval::new(&samples, 0, 4).median(), 3.0);
        assert_eq!(Interval::new(&samples, 0, 9).median(), 5.5);
    }

    #[test]
    fn test_to_transition() {
        let samples = samples();
        let transition = Interval::new(&samples, 5, 9).to_transition();
        let origin = transition.origin().as_numeric().unwrap();
        assert_eq!(origin.min(), 6.0);
        assert_eq!(origin.max(), 10.0);
        assert_eq!(transition.discretized_value(), 8.0);
        assert!(!origin.is_first() && !origin.is_last());
    }

    #[test]
    fn test_intervals_from_ends_cover_range() {
        let samples = samples();
        let intervals = intervals_from_ends(&samples, &[2, 6]);
        let ranges: Vec<(usize, usize)> = intervals.iter().map(|i| (i.begin(), i.end())).collect();
        assert_eq!(ranges, vec![(0, 2), (3, 6), (7, 9)]);
        assert_eq!(boundary_cut_points(&intervals), vec![3.5, 7.5]);
    }

    #[test]
    fn test_merge() {
        let samples = samples();
        let merged = Interval::new(&samples, 0, 4).merge(&Interval::new(&samples, 5, 6));
        assert_eq!((merged.begin(), merged.end()), (0, 6));
        assert_eq!(merged.class_dist(), &[5, 2]);
    }
}
