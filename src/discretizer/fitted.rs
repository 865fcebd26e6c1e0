//! The fit/apply driver shared by every method.

use tracing::debug;

use super::error::{DiscretizeError, Result};
use super::method::Method;
use super::optimizer::SupervisedOptimizer;
use super::origin::OriginKind;
use super::samples::SortedSamples;
use super::transition::Transition;
use super::unsupervised::UnsupervisedBinning;
use super::value::Value;

/// A discretizer: a method plus, once fitted, its transitions.
///
/// Fitted exactly once; afterwards it is read-only.
#[derive(Debug, Clone)]
pub struct Discretizer {
    method: Method,
    transitions: Option<Vec<Transition>>,
}

impl Discretizer {
    pub fn new(method: impl Into<Method>) -> Self {
        Self {
            method: method.into(),
            transitions: None,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn is_fitted(&self) -> bool {
        self.transitions.is_some()
    }

    /// Fitted transitions; empty before `fit`.
    pub fn transitions(&self) -> &[Transition] {
        self.transitions.as_deref().unwrap_or_default()
    }

    /// Fit on `values`, with `labels` for the supervised methods.
    ///
    /// All validation happens before any work: a rejected fit leaves the
    /// discretizer unfitted. Unsupervised methods ignore `labels`.
    pub fn fit(&mut self, values: &[Value], labels: Option<&[f64]>) -> Result<()> {
        let kind = self.method.kind();
        if values.is_empty() {
            return Err(DiscretizeError::EmptyInput);
        }
        if kind.is_supervised() {
            let Some(labels) = labels else {
                return Err(DiscretizeError::MissingLabels {
                    method: kind.to_string(),
                });
            };
            if labels.len() != values.len() {
                return Err(DiscretizeError::LabelLengthMismatch {
                    values: values.len(),
                    labels: labels.len(),
                });
            }
        }
        if self.is_fitted() {
            return Err(DiscretizeError::AlreadyFitted);
        }

        let labels = labels.unwrap_or_default();
        let mut transitions = match &self.method {
            Method::Unique(unique) => unique.fit_values(values),
            Method::Ameva(optimizer) => fit_supervised(optimizer, values, labels)?,
            Method::Mdlp(optimizer) => fit_supervised(optimizer, values, labels)?,
            Method::FusInter(optimizer) => fit_supervised(optimizer, values, labels)?,
            Method::Percentile(binning) => fit_unsupervised(binning, values)?,
            Method::EqualSize(binning) => fit_unsupervised(binning, values)?,
            Method::Manual(binning) => fit_unsupervised(binning, values)?,
            Method::Random(binning) => fit_unsupervised(binning, values)?,
        };

        check_unambiguous(&transitions)?;
        mark_open_ends(&mut transitions);
        debug!(method = %kind, bins = transitions.len(), "discretizer fitted");

        self.transitions = Some(transitions);
        Ok(())
    }

    /// Discretized value for `value`.
    ///
    /// The first transition accepting the value wins. A number in a gap between two
    /// numeric bins goes to the nearest bin below it: the one with the largest
    /// minimum not above the value.
    pub fn apply(&self, value: &Value) -> Result<f64> {
        let transitions = self.transitions.as_deref().ok_or(DiscretizeError::NotFitted)?;

        if let Some(transition) = transitions.iter().find(|t| t.origin().can_discretize(value)) {
            return Ok(transition.discretized_value());
        }

        if let Some(v) = value.as_f64() {
            let mut nearest: Option<(&Transition, f64)> = None;
            for transition in transitions {
                if let Some(origin) = transition.origin().as_numeric() {
                    let closer = nearest.map_or(true, |(_, min)| origin.min() > min);
                    if origin.min() <= v && closer {
                        nearest = Some((transition, origin.min()));
                    }
                }
            }
            if let Some((transition, _)) = nearest {
                return Ok(transition.discretized_value());
            }
        }

        Err(DiscretizeError::NoTransitionFor {
            value: value.to_string(),
        })
    }

    pub fn apply_all(&self, values: &[Value]) -> Result<Vec<f64>> {
        values.iter().map(|value| self.apply(value)).collect()
    }

    /// The transition producing `discretized_value`.
    pub fn transition_for(&self, discretized_value: f64) -> Result<&Transition> {
        self.transitions
            .as_deref()
            .ok_or(DiscretizeError::NotFitted)?
            .iter()
            .find(|t| t.discretized_value() == discretized_value)
            .ok_or(DiscretizeError::UnknownDiscretizedValue {
                value: discretized_value,
            })
    }
}

fn fit_supervised(
    optimizer: &impl SupervisedOptimizer,
    values: &[Value],
    labels: &[f64],
) -> Result<Vec<Transition>> {
    let numbers = numeric_values(values, optimizer.name())?;
    let samples = SortedSamples::from_unsorted(&numbers, labels)?;
    optimizer.fit_supervised(&samples)
}

fn fit_unsupervised(binning: &impl UnsupervisedBinning, values: &[Value]) -> Result<Vec<Transition>> {
    let mut sorted = numeric_values(values, binning.name())?;
    sorted.sort_by(|a, b| a.total_cmp(b));
    binning.fit_unsupervised(&sorted)
}

fn numeric_values(values: &[Value], method: &str) -> Result<Vec<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Number(v) if v.is_nan() => Err(DiscretizeError::NotANumber { index }),
            Value::Number(v) => Ok(*v),
            Value::Text(text) => Err(DiscretizeError::NonNumericValue {
                method: method.to_string(),
                value: text.clone(),
            }),
        })
        .collect()
}

fn check_unambiguous(transitions: &[Transition]) -> Result<()> {
    let mut values: Vec<f64> = transitions.iter().map(Transition::discretized_value).collect();
    values.sort_by(|a, b| a.total_cmp(b));
    match values.windows(2).find(|w| w[0] == w[1]) {
        Some(w) => Err(DiscretizeError::AmbiguousTransitions { value: w[0] }),
        None => Ok(()),
    }
}

/// Open the lowest bin towards -inf and the highest towards +inf.
///
/// Only done when every origin is numeric; the first bin found wins on ties.
fn mark_open_ends(transitions: &mut [Transition]) {
    if transitions.is_empty()
        || !transitions.iter().all(|t| t.origin().kind() == OriginKind::Numeric)
    {
        return;
    }

    let mut first = 0;
    let mut last = 0;
    for (i, transition) in transitions.iter().enumerate() {
        if let (Some(origin), Some(lowest), Some(highest)) = (
            transition.origin().as_numeric(),
            transitions[first].origin().as_numeric(),
            transitions[last].origin().as_numeric(),
        ) {
            if origin.min() < lowest.min() {
                first = i;
            }
            if origin.max() > highest.max() {
                last = i;
            }
        }
    }

    if let Some(origin) = transitions[first].origin_mut().as_numeric_mut() {
        origin.set_first(true);
    }
    if let Some(origin) = transitions[last].origin_mut().as_numeric_mut() {
        origin.set_last(true);
    }
}
