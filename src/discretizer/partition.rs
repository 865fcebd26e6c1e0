//! Equal-class partitioning: the initial run-length partition of the sorted samples.

use super::interval::Interval;
use super::samples::SortedSamples;

/// Label of a run of identical values: the single class it carries, or mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunClass {
    Pure(usize),
    Mixed,
}

/// Split the samples into the coarsest list of intervals with stable labels.
///
/// Single pass, left to right. A run of identical values is never split.
/// Consecutive runs carrying one and the same class merge into a single interval;
/// a value seen with more than one class forms an interval of its own and never
/// merges with its neighbours. The result covers `[0, len)` without gaps or overlaps.
pub fn equal_class_split(samples: &SortedSamples) -> Vec<Interval<'_>> {
    let n = samples.len();
    let mut intervals = Vec::new();
    if n == 0 {
        return intervals;
    }

    // Open interval: begin index and the class of the runs it holds
    let mut open_begin = 0usize;
    let mut open_class: Option<RunClass> = None;

    let mut run_begin = 0usize;
    let mut run_class = RunClass::Pure(samples.class_id(0));

    for i in 1..=n {
        if i < n && samples.value(i) == samples.value(i - 1) {
            if run_class != RunClass::Mixed && RunClass::Pure(samples.class_id(i)) != run_class {
                run_class = RunClass::Mixed;
            }
            continue;
        }

        // Run [run_begin, i - 1] is complete
        match (open_class, run_class) {
            (Some(RunClass::Pure(open)), RunClass::Pure(run)) if open == run => {}
            (None, _) => open_class = Some(run_class),
            (Some(_), _) => {
                intervals.push(Interval::new(samples, open_begin, run_begin - 1));
                open_begin = run_begin;
                open_class = Some(run_class);
            }
        }

        if i < n {
            run_begin = i;
            run_class = RunClass::Pure(samples.class_id(i));
        }
    }
    intervals.push(Interval::new(samples, open_begin, n - 1));

    intervals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(samples: &SortedSamples) -> Vec<(usize, usize)> {
        equal_class_split(samples)
            .iter()
            .map(|i| (i.begin(), i.end()))
            .collect()
    }

    #[test]
    fn test_same_class_runs_merge() {
        let samples = SortedSamples::new(
            (1..=10)
                .map(|v| (v as f64, if v <= 5 { 0.0 } else { 1.0 }))
                .collect(),
        )
        .unwrap();
        assert_eq!(ranges(&samples), vec![(0, 4), (5, 9)]);
    }

    #[test]
    fn test_mixed_value_stands_alone() {
        let samples = SortedSamples::new(vec![
            (1.0, 0.0),
            (2.0, 0.0),
            (3.0, 0.0),
            (3.0, 1.0),
            (4.0, 0.0),
            (5.0, 0.0),
        ])
        .unwrap();
        assert_eq!(ranges(&samples), vec![(0, 1), (2, 3), (4, 5)]);
    }

    #[test]
    fn test_repeated_pure_values_merge() {
        let samples = SortedSamples::new(vec![
            (1.0, 1.0),
            (1.0, 1.0),
            (2.0, 1.0),
            (3.0, 0.0),
            (3.0, 0.0),
        ])
        .unwrap();
        assert_eq!(ranges(&samples), vec![(0, 2), (3, 4)]);
    }

    #[test]
    fn test_interleaved_labels_on_every_value() {
        let samples = SortedSamples::new(vec![
            (1.0, 1.0),
            (1.0, 0.0),
            (2.0, 1.0),
            (2.0, 0.0),
        ])
        .unwrap();
        assert_eq!(ranges(&samples), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn test_single_sample() {
        let samples = SortedSamples::new(vec![(4.0, 1.0)]).unwrap();
        assert_eq!(ranges(&samples), vec![(0, 0)]);
    }
}
