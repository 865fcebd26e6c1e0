use super::UnsupervisedBinning;
use crate::discretizer::error::{DiscretizeError, Result};
use crate::discretizer::origin::Origin;
use crate::discretizer::transition::Transition;

/// Bins delimited by user-given upper class boundaries.
///
/// Each bin is labeled with the midpoint of its range. The data can widen the outer
/// bins: the lowest bin starts at the smaller of the data minimum and the first
/// boundary, and a closing bin runs up to the data maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct Manual {
    boundaries: Vec<f64>,
}

impl Manual {
    /// Boundaries are sorted and deduplicated; NaN is rejected.
    pub fn new(boundaries: impl IntoIterator<Item = f64>) -> Result<Self> {
        let mut boundaries: Vec<f64> = boundaries.into_iter().collect();
        if boundaries.iter().any(|b| b.is_nan()) {
            return Err(DiscretizeError::InvalidParameter(
                "manual boundaries must be numbers".to_string(),
            ));
        }
        boundaries.sort_by(|a, b| a.total_cmp(b));
        boundaries.dedup();
        Ok(Self { boundaries })
    }

    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }
}

impl UnsupervisedBinning for Manual {
    fn name(&self) -> &'static str {
        "manual"
    }

    fn fit_unsupervised(&self, sorted: &[f64]) -> Result<Vec<Transition>> {
        let (Some(&first), Some(&last)) = (sorted.first(), sorted.last()) else {
            return Err(DiscretizeError::EmptyInput);
        };
        let (min, max) = match (self.boundaries.first(), self.boundaries.last()) {
            (Some(&low), Some(&high)) => (first.min(low), last.max(high)),
            _ => (first, last),
        };

        let mut transitions = Vec::with_capacity(self.boundaries.len() + 1);
        let mut lower = min;
        for &boundary in &self.boundaries {
            transitions.push(Transition::new(
                Origin::numeric(lower, boundary),
                (lower + boundary) / 2.0,
            ));
            lower = boundary;
        }

        let closed = transitions
            .last()
            .and_then(|t: &Transition| t.origin().as_numeric())
            .is_some_and(|origin| origin.min() == max && origin.max() == max);
        if !closed {
            transitions.push(Transition::new(
                Origin::numeric(lower, max),
                (lower + max) / 2.0,
            ));
        }

        Ok(transitions)
    }
}
