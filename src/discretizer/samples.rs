//! The shared sorted (value, label) sequence every supervised optimizer works on.

use super::error::{DiscretizeError, Result};

/// Value/label pairs sorted ascending by value.
///
/// Besides the pairs themselves this keeps the distinct class labels, each pair's
/// class index and per-class prefix counts. Prefix counts turn every class
/// distribution over an index range into `classes` subtractions, which is what
/// keeps the optimizers' inner loops cheap.
#[derive(Debug, Clone)]
pub struct SortedSamples {
    values: Vec<f64>,
    labels: Vec<f64>,
    classes: Vec<f64>,
    class_ids: Vec<usize>,
    /// `prefix[c][i]` = occurrences of class `c` in `[0, i)`
    prefix: Vec<Vec<usize>>,
}

impl SortedSamples {
    /// Build from pairs that are already sorted ascending by value.
    pub fn new(pairs: Vec<(f64, f64)>) -> Result<Self> {
        if pairs.is_empty() {
            return Err(DiscretizeError::EmptyInput);
        }
        for (index, (value, label)) in pairs.iter().enumerate() {
            if value.is_nan() {
                return Err(DiscretizeError::NotANumber { index });
            }
            if label.is_nan() {
                return Err(DiscretizeError::InvalidLabel { index });
            }
        }
        if let Some(index) = pairs.windows(2).position(|w| w[0].0 > w[1].0) {
            return Err(DiscretizeError::Unsorted { index: index + 1 });
        }

        let (values, labels): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        Ok(Self::index(values, labels))
    }

    /// Pair `values` with `labels` and sort by value (stable among equal values).
    pub fn from_unsorted(values: &[f64], labels: &[f64]) -> Result<Self> {
        if values.len() != labels.len() {
            return Err(DiscretizeError::LabelLengthMismatch {
                values: values.len(),
                labels: labels.len(),
            });
        }
        let mut pairs: Vec<(f64, f64)> = values.iter().copied().zip(labels.iter().copied()).collect();
        if let Some(index) = pairs.iter().position(|(v, _)| v.is_nan()) {
            return Err(DiscretizeError::NotANumber { index });
        }
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self::new(pairs)
    }

    fn index(values: Vec<f64>, labels: Vec<f64>) -> Self {
        // -0.0 and 0.0 are the same class
        let labels: Vec<f64> = labels
            .into_iter()
            .map(|l| if l == 0.0 { 0.0 } else { l })
            .collect();

        let mut classes = labels.clone();
        classes.sort_by(|a, b| a.total_cmp(b));
        classes.dedup();

        let class_ids: Vec<usize> = labels
            .iter()
            .map(|label| classes.partition_point(|c| c < label))
            .collect();

        let mut prefix = vec![vec![0usize; values.len() + 1]; classes.len()];
        for (i, &class) in class_ids.iter().enumerate() {
            for (c, counts) in prefix.iter_mut().enumerate() {
                counts[i + 1] = counts[i] + usize::from(c == class);
            }
        }

        Self {
            values,
            labels,
            classes,
            class_ids,
            prefix,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    pub fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    pub fn label(&self, index: usize) -> f64 {
        self.labels[index]
    }

    /// Distinct class labels, ascending.
    pub fn classes(&self) -> &[f64] {
        &self.classes
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Index into [`classes`](Self::classes) of the label at `index`.
    pub fn class_id(&self, index: usize) -> usize {
        self.class_ids[index]
    }

    pub fn min(&self) -> f64 {
        self.values[0]
    }

    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Per-class counts over the inclusive index range `[begin, end]`.
    pub fn class_distribution(&self, begin: usize, end: usize) -> Vec<usize> {
        self.prefix
            .iter()
            .map(|counts| counts[end + 1] - counts[begin])
            .collect()
    }

    /// Per-class counts over the whole sequence.
    pub fn class_totals(&self) -> Vec<usize> {
        self.class_distribution(0, self.len() - 1)
    }

    /// First index whose value is not below `cut`.
    pub fn partition_point(&self, cut: f64) -> usize {
        self.values.partition_point(|v| *v < cut)
    }

    /// Midpoints between every pair of adjacent distinct values, ascending.
    pub fn distinct_midpoints(&self) -> Vec<f64> {
        let mut midpoints = Vec::new();
        for w in self.values.windows(2) {
            if w[0] != w[1] {
                midpoints.push((w[0] + w[1]) / 2.0);
            }
        }
        midpoints
    }

    pub fn distinct_value_count(&self) -> usize {
        1 + self.values.windows(2).filter(|w| w[0] != w[1]).count()
    }
}
