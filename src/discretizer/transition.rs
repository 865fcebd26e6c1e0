//! Transitions pair an origin with its discretized output value.

use std::fmt;

use serde::Serialize;

use super::format::round_to_two;
use super::origin::Origin;

/// The relation between an original value range and its discretized value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    origin: Origin,
    discretized_value: f64,
}

impl Transition {
    pub fn new(origin: Origin, discretized_value: f64) -> Self {
        Self {
            origin,
            discretized_value,
        }
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub(crate) fn origin_mut(&mut self) -> &mut Origin {
        &mut self.origin
    }

    pub fn discretized_value(&self) -> f64 {
        self.discretized_value
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, round_to_two(self.discretized_value))
    }
}

/// How a numeric bin chooses its discretized value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum BinLabeling {
    /// Median of the values falling into the bin.
    #[default]
    Median,
    /// Ascending position of the bin: 0, 1, 2, ...
    Ordinal,
}

impl fmt::Display for BinLabeling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinLabeling::Median => write!(f, "median"),
            BinLabeling::Ordinal => write!(f, "ordinal"),
        }
    }
}

impl std::str::FromStr for BinLabeling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "median" => Ok(BinLabeling::Median),
            "ordinal" => Ok(BinLabeling::Ordinal),
            _ => Err(format!(
                "Unknown bin labeling: '{}'. Use 'median' or 'ordinal'.",
                s
            )),
        }
    }
}

/// Build ordinal-labeled numeric transitions from interior cut points.
///
/// Bins are `[min, c0], [c0, c1], ..., [c_k, max]`, labeled `0, 1, ..., k+1`.
/// Cut points are sorted and deduplicated first; cut points outside `[min, max)`
/// cannot delimit a bin and are dropped. Boundary openness is left to the driver.
pub fn transitions_from_cut_points(cut_points: &[f64], min: f64, max: f64) -> Vec<Transition> {
    let mut cuts: Vec<f64> = cut_points
        .iter()
        .copied()
        .filter(|c| *c >= min && *c < max)
        .collect();
    cuts.sort_by(|a, b| a.total_cmp(b));
    cuts.dedup();

    let mut transitions = Vec::with_capacity(cuts.len() + 1);
    let mut lower = min;
    for cut in cuts {
        let ordinal = transitions.len() as f64;
        transitions.push(Transition::new(Origin::numeric(lower, cut), ordinal));
        lower = cut;
    }
    let ordinal = transitions.len() as f64;
    transitions.push(Transition::new(Origin::numeric(lower, max), ordinal));

    transitions
}
